use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::QuestionType;

/// A submitted answer to one question.
///
/// Stored answers are a tagged union over the value shapes a respondent can
/// submit. The untagged serde representation lets JSON answers deserialize
/// by shape, matching how responses arrive from the transport layer. Date
/// answers are carried as [`AnswerValue::Text`] in `YYYY-MM-DD` form and
/// rating answers as integral [`AnswerValue::Number`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    Selections(Vec<String>),
}

/// The runtime shape of an [`AnswerValue`], used for analyzer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AnswerShape {
    #[display("boolean")]
    Boolean,
    #[display("number")]
    Number,
    #[display("text")]
    Text,
    #[display("selections")]
    Selections,
}

impl AnswerValue {
    /// Returns the runtime shape of this answer.
    #[must_use]
    pub fn shape(&self) -> AnswerShape {
        match self {
            Self::Boolean(_) => AnswerShape::Boolean,
            Self::Number(_) => AnswerShape::Number,
            Self::Text(_) => AnswerShape::Text,
            Self::Selections(_) => AnswerShape::Selections,
        }
    }

    /// Returns the numeric value, if this answer is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this answer is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns this answer as a list of selections.
    ///
    /// A single string counts as one selection; lists are returned as-is.
    /// Other shapes yield `None`.
    #[must_use]
    pub fn as_selections(&self) -> Option<Vec<String>> {
        match self {
            Self::Text(s) => Some(vec![s.clone()]),
            Self::Selections(list) => Some(list.clone()),
            _ => None,
        }
    }

    /// Whether this answer's shape is admissible for the declared question
    /// type.
    ///
    /// This is a shape check only, not full validation: a `rating` answer
    /// of 9.5 still matches here but fails
    /// [`validate_answer`](crate::validate::validate_answer).
    #[must_use]
    pub fn matches_type(&self, question_type: QuestionType) -> bool {
        match question_type {
            QuestionType::Numeric | QuestionType::Rating => {
                matches!(self, Self::Number(_))
            }
            QuestionType::Text | QuestionType::Date => matches!(self, Self::Text(_)),
            QuestionType::Boolean => matches!(self, Self::Boolean(_)),
            QuestionType::MultipleChoice => {
                matches!(self, Self::Text(_) | Self::Selections(_))
            }
        }
    }
}

/// One submitted response to a survey.
///
/// Records are immutable after creation. The `answers` map is keyed by
/// question id; a question absent from the map was skipped by the
/// respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub survey_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_id: Option<i64>,
    pub answers: BTreeMap<i64, AnswerValue>,
    pub submitted_at: DateTime<Utc>,
}

impl ResponseRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(
        survey_id: i64,
        respondent_id: Option<i64>,
        answers: BTreeMap<i64, AnswerValue>,
    ) -> Self {
        Self {
            survey_id,
            respondent_id,
            answers,
            submitted_at: Utc::now(),
        }
    }

    /// Returns the answer for a question, if the respondent gave one.
    #[must_use]
    pub fn answer(&self, question_id: i64) -> Option<&AnswerValue> {
        self.answers.get(&question_id)
    }
}
