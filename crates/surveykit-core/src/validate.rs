use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    question::{Question, QuestionType, Survey},
    response::AnswerValue,
};

/// Rejection reason for a submitted answer.
///
/// Every variant names the offending question so the caller can report the
/// failure against the right field. Validation failures are never retried;
/// only corrected input can change the outcome.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("question {question_id} does not exist in this survey")]
    UnknownQuestion { question_id: i64 },
    #[display("invalid answer for question {question_id}: expected a {expected} value")]
    TypeMismatch {
        question_id: i64,
        expected: QuestionType,
    },
    #[display("invalid answer for question {question_id}: rating must be an integer from 1 to 5")]
    RatingOutOfRange { question_id: i64 },
    #[display("invalid answer for question {question_id}: {value:?} is not a YYYY-MM-DD date")]
    InvalidDate { question_id: i64, value: String },
    #[display("invalid answer for question {question_id}: {choice:?} is not an available option")]
    UnknownChoice { question_id: i64, choice: String },
    #[display("question {question_id} declares no options to validate selections against")]
    MissingOptions { question_id: i64 },
}

impl ValidationError {
    /// The id of the question the rejected answer belongs to.
    #[must_use]
    pub fn question_id(&self) -> i64 {
        match self {
            Self::UnknownQuestion { question_id }
            | Self::TypeMismatch { question_id, .. }
            | Self::RatingOutOfRange { question_id }
            | Self::InvalidDate { question_id, .. }
            | Self::UnknownChoice { question_id, .. }
            | Self::MissingOptions { question_id } => *question_id,
        }
    }
}

/// Validates one answer against one question's declared type.
///
/// Pure function; every question type is dispatched through the single
/// `match` below, date questions included.
///
/// # Examples
///
/// ```
/// use surveykit_core::{AnswerValue, Question, QuestionType, validate_answer};
///
/// let question = Question::new(1, "When did you sign up?", QuestionType::Date);
/// assert!(validate_answer(&question, &AnswerValue::Text("2024-02-29".into())).is_ok());
/// assert!(validate_answer(&question, &AnswerValue::Text("2023-02-30".into())).is_err());
/// ```
pub fn validate_answer(question: &Question, answer: &AnswerValue) -> Result<(), ValidationError> {
    let question_id = question.id;
    match question.question_type {
        QuestionType::Numeric => match answer {
            AnswerValue::Number(n) if n.is_finite() => Ok(()),
            _ => Err(ValidationError::TypeMismatch {
                question_id,
                expected: QuestionType::Numeric,
            }),
        },
        QuestionType::Text => match answer {
            // Empty text is an acceptable answer.
            AnswerValue::Text(_) => Ok(()),
            _ => Err(ValidationError::TypeMismatch {
                question_id,
                expected: QuestionType::Text,
            }),
        },
        QuestionType::Boolean => match answer {
            AnswerValue::Boolean(_) => Ok(()),
            _ => Err(ValidationError::TypeMismatch {
                question_id,
                expected: QuestionType::Boolean,
            }),
        },
        QuestionType::Rating => match answer {
            AnswerValue::Number(n) => {
                if n.fract() == 0.0 && (1.0..=5.0).contains(n) {
                    Ok(())
                } else {
                    Err(ValidationError::RatingOutOfRange { question_id })
                }
            }
            _ => Err(ValidationError::TypeMismatch {
                question_id,
                expected: QuestionType::Rating,
            }),
        },
        QuestionType::Date => match answer {
            AnswerValue::Text(s) => {
                // NaiveDate's FromStr is strict ISO-8601, so impossible
                // calendar dates and malformed strings both fail here.
                s.parse::<NaiveDate>()
                    .map(|_| ())
                    .map_err(|_| ValidationError::InvalidDate {
                        question_id,
                        value: s.clone(),
                    })
            }
            _ => Err(ValidationError::TypeMismatch {
                question_id,
                expected: QuestionType::Date,
            }),
        },
        QuestionType::MultipleChoice => {
            let Some(options) = question.options.as_deref() else {
                return Err(ValidationError::MissingOptions { question_id });
            };
            match answer {
                AnswerValue::Text(choice) => {
                    check_choice(question_id, options, choice)
                }
                AnswerValue::Selections(choices) => {
                    // Duplicates are allowed and kept; each element must be
                    // a declared option.
                    for choice in choices {
                        check_choice(question_id, options, choice)?;
                    }
                    Ok(())
                }
                _ => Err(ValidationError::TypeMismatch {
                    question_id,
                    expected: QuestionType::MultipleChoice,
                }),
            }
        }
    }
}

fn check_choice(question_id: i64, options: &[String], choice: &str) -> Result<(), ValidationError> {
    if options.iter().any(|o| o == choice) {
        Ok(())
    } else {
        Err(ValidationError::UnknownChoice {
            question_id,
            choice: choice.to_string(),
        })
    }
}

/// Validates a whole submission against a survey.
///
/// Unknown question ids are rejected before any per-field check runs.
/// The first failure rejects the entire submission; there is no partial
/// accept.
pub fn validate_response(
    survey: &Survey,
    answers: &BTreeMap<i64, AnswerValue>,
) -> Result<(), ValidationError> {
    for &question_id in answers.keys() {
        if survey.question(question_id).is_none() {
            return Err(ValidationError::UnknownQuestion { question_id });
        }
    }

    for (&question_id, answer) in answers {
        let question = survey
            .question(question_id)
            .ok_or(ValidationError::UnknownQuestion { question_id })?;
        validate_answer(question, answer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> Survey {
        Survey {
            id: 1,
            title: "Product feedback".to_string(),
            description: Some("Quarterly customer survey".to_string()),
            questions: vec![
                Question::new(1, "Your age?", QuestionType::Numeric),
                Question::new(2, "Any comments?", QuestionType::Text),
                Question::multiple_choice(3, "Favorite color?", ["Red", "Blue", "Green"]),
                Question::new(4, "Overall rating?", QuestionType::Rating),
                Question::new(5, "Would you recommend us?", QuestionType::Boolean),
                Question::new(6, "When did you sign up?", QuestionType::Date),
            ],
        }
    }

    #[test]
    fn test_numeric_accepts_finite_numbers_only() {
        let question = Question::new(1, "Your age?", QuestionType::Numeric);
        assert!(validate_answer(&question, &AnswerValue::Number(37.0)).is_ok());
        assert!(validate_answer(&question, &AnswerValue::Number(f64::NAN)).is_err());
        assert!(validate_answer(&question, &AnswerValue::Number(f64::INFINITY)).is_err());
        assert!(validate_answer(&question, &AnswerValue::Text("37".into())).is_err());
    }

    #[test]
    fn test_text_accepts_empty_string() {
        let question = Question::new(2, "Any comments?", QuestionType::Text);
        assert!(validate_answer(&question, &AnswerValue::Text(String::new())).is_ok());
        assert!(validate_answer(&question, &AnswerValue::Number(1.0)).is_err());
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        let question = Question::new(4, "Overall rating?", QuestionType::Rating);
        for value in 1..=5 {
            assert!(validate_answer(&question, &AnswerValue::Number(f64::from(value))).is_ok());
        }
        assert!(matches!(
            validate_answer(&question, &AnswerValue::Number(6.0)),
            Err(ValidationError::RatingOutOfRange { question_id: 4 })
        ));
        assert!(validate_answer(&question, &AnswerValue::Number(0.0)).is_err());
        assert!(validate_answer(&question, &AnswerValue::Number(3.5)).is_err());
    }

    #[test]
    fn test_date_requires_valid_calendar_date() {
        let question = Question::new(6, "When did you sign up?", QuestionType::Date);
        assert!(validate_answer(&question, &AnswerValue::Text("2024-05-01".into())).is_ok());
        assert!(validate_answer(&question, &AnswerValue::Text("2023-02-30".into())).is_err());
        assert!(validate_answer(&question, &AnswerValue::Text("2023-13-01".into())).is_err());
        assert!(validate_answer(&question, &AnswerValue::Text("05/01/2024".into())).is_err());
    }

    #[test]
    fn test_multiple_choice_membership() {
        let question = Question::multiple_choice(3, "Favorite color?", ["Red", "Blue", "Green"]);
        assert!(validate_answer(&question, &AnswerValue::Text("Blue".into())).is_ok());
        assert!(validate_answer(&question, &AnswerValue::Text("Purple".into())).is_err());

        let picks = AnswerValue::Selections(vec!["Red".into(), "Blue".into(), "Red".into()]);
        assert!(validate_answer(&question, &picks).is_ok());

        let picks = AnswerValue::Selections(vec!["Red".into(), "Purple".into()]);
        assert!(matches!(
            validate_answer(&question, &picks),
            Err(ValidationError::UnknownChoice { question_id: 3, .. })
        ));
    }

    #[test]
    fn test_multiple_choice_without_options_is_rejected() {
        let question = Question::new(3, "Favorite color?", QuestionType::MultipleChoice);
        assert!(matches!(
            validate_answer(&question, &AnswerValue::Text("Blue".into())),
            Err(ValidationError::MissingOptions { question_id: 3 })
        ));
    }

    #[test]
    fn test_unknown_question_rejected_before_field_checks() {
        let survey = survey();
        let mut answers = BTreeMap::new();
        // The rating answer is also invalid, but the unknown id must win.
        answers.insert(4, AnswerValue::Number(9.0));
        answers.insert(99, AnswerValue::Text("anything".into()));

        assert!(matches!(
            validate_response(&survey, &answers),
            Err(ValidationError::UnknownQuestion { question_id: 99 })
        ));
    }

    #[test]
    fn test_valid_submission_passes_whole() {
        let survey = survey();
        let mut answers = BTreeMap::new();
        answers.insert(1, AnswerValue::Number(37.0));
        answers.insert(2, AnswerValue::Text("Works well".into()));
        answers.insert(3, AnswerValue::Selections(vec!["Blue".into(), "Green".into()]));
        answers.insert(4, AnswerValue::Number(5.0));
        answers.insert(5, AnswerValue::Boolean(true));
        answers.insert(6, AnswerValue::Text("2024-01-15".into()));

        assert!(validate_response(&survey, &answers).is_ok());
    }

    #[test]
    fn test_single_bad_answer_fails_submission() {
        let survey = survey();
        let mut answers = BTreeMap::new();
        answers.insert(1, AnswerValue::Number(37.0));
        answers.insert(4, AnswerValue::Number(6.0));

        assert!(validate_response(&survey, &answers).is_err());
    }

    #[test]
    fn test_error_reports_question_id() {
        let question = Question::new(4, "Overall rating?", QuestionType::Rating);
        let err = validate_answer(&question, &AnswerValue::Number(6.0)).unwrap_err();
        assert_eq!(err.question_id(), 4);
        assert!(err.to_string().contains("question 4"));
    }
}
