//! Survey domain model and response validation.
//!
//! This crate defines the read-only domain objects handed to the analytics
//! engine by its collaborators (surveys, questions, submitted responses)
//! and the validation rules applied to a submission before it is accepted.
//!
//! # Overview
//!
//! - [`question`]: [`Survey`], [`Question`] and [`QuestionType`]
//! - [`response`]: [`AnswerValue`] and [`ResponseRecord`]
//! - [`validate`]: per-answer and whole-submission validation
//!
//! All validation is pure: no I/O, no shared state, and a failed check for
//! any single answer rejects the whole submission.
//!
//! # Example
//!
//! ```
//! use surveykit_core::{AnswerValue, Question, QuestionType, validate_answer};
//!
//! let question = Question::new(1, "How would you rate us?", QuestionType::Rating);
//!
//! assert!(validate_answer(&question, &AnswerValue::Number(4.0)).is_ok());
//! assert!(validate_answer(&question, &AnswerValue::Number(6.0)).is_err());
//! ```

pub use self::{question::*, response::*, validate::*};

pub mod question;
pub mod response;
pub mod validate;
