use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{choice::ChoiceAnalytics, numeric::NumericAnalytics, text::TextAnalytics};

/// Analytics for one question, tagged by the analyzer that produced it.
///
/// The serde representation matches the report records consumed by
/// downstream dashboards: `{"type": "numeric", "total_responses": ...,
/// "statistics": {...}}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionAnalytics {
    Numeric(NumericAnalytics),
    Text(TextAnalytics),
    MultipleChoice(ChoiceAnalytics),
    /// Produced for answer shapes with no matching analyzer (booleans) and
    /// for questions every respondent skipped.
    Empty,
}

impl QuestionAnalytics {
    /// Count of non-absent answers that fed this record.
    #[must_use]
    pub fn total_responses(&self) -> usize {
        match self {
            Self::Numeric(a) => a.total_responses,
            Self::Text(a) => a.total_responses,
            Self::MultipleChoice(a) => a.total_responses,
            Self::Empty => 0,
        }
    }
}

/// A survey-level analytics report.
///
/// Derived and stateless: recomputed on every request, never persisted by
/// this engine. `completion_rate` and `average_time` are pass-through
/// fields owned by the session layer; they default to 0.0 when that data
/// is not tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyAnalytics {
    pub total_responses: usize,
    pub completion_rate: f64,
    pub average_time: f64,
    pub question_analytics: BTreeMap<i64, QuestionAnalytics>,
}
