//! Per-question analyzers and survey-level analytics aggregation.
//!
//! Given a set of submitted [`ResponseRecord`](surveykit_core::ResponseRecord)s,
//! this crate groups answers by question, analyzes each group according to
//! its value shape, and assembles a [`SurveyAnalytics`] report:
//!
//! - [`numeric`]: mean/median/mode/std-dev/quartiles for numeric answers
//! - [`text`]: sentiment, word counts and word frequencies for free text
//! - [`choice`]: selection frequencies for multiple-choice answers
//! - [`aggregate`]: grouping, shape dispatch and report assembly
//!
//! All computations are pure and deterministic: calling the aggregator
//! twice on the same responses yields identical reports. Each analyzer is
//! also independently callable.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use surveykit_analytics::aggregate_responses;
//! use surveykit_core::{AnswerValue, ResponseRecord};
//!
//! let responses: Vec<ResponseRecord> = (1..=3)
//!     .map(|age| {
//!         let mut answers = BTreeMap::new();
//!         answers.insert(1, AnswerValue::Number(f64::from(20 + age)));
//!         ResponseRecord::new(1, None, answers)
//!     })
//!     .collect();
//!
//! let report = aggregate_responses(&responses).unwrap();
//! assert_eq!(report.total_responses, 3);
//! ```

pub use self::{aggregate::*, report::*};

pub mod aggregate;
pub mod choice;
pub mod numeric;
pub mod report;
pub mod text;

/// Analytics was requested over an empty response set.
///
/// With zero responses there is no question set to infer, so aggregation
/// cannot even produce a zero-state report.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cannot aggregate an empty response set")]
pub struct EmptyResponseSetError;
