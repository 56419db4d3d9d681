use serde::{Deserialize, Serialize};

/// The declared type of a survey question.
///
/// The type determines which validation rules apply to submitted answers
/// (see [`validate_answer`](crate::validate::validate_answer)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Any finite number.
    #[display("numeric")]
    Numeric,
    /// Free text, empty allowed.
    #[display("text")]
    Text,
    /// One or more selections from a fixed option list.
    #[display("multiple_choice")]
    MultipleChoice,
    /// An integer from 1 to 5.
    #[display("rating")]
    Rating,
    /// A yes/no answer.
    #[display("boolean")]
    Boolean,
    /// A calendar date in `YYYY-MM-DD` form.
    #[display("date")]
    Date,
}

/// A single survey question.
///
/// Questions are immutable once created. `options` is required and
/// non-empty only for closed question types (`multiple_choice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    /// The text content shown to respondents.
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Allowed choices for closed questions, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    /// Creates an open question without an option list.
    #[must_use]
    pub fn new(id: i64, text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id,
            text: text.into(),
            question_type,
            options: None,
        }
    }

    /// Creates a multiple-choice question with the given options.
    ///
    /// # Examples
    ///
    /// ```
    /// use surveykit_core::Question;
    ///
    /// let question = Question::multiple_choice(1, "Favorite color?", ["Red", "Blue", "Green"]);
    /// assert_eq!(question.options.as_deref().unwrap().len(), 3);
    /// ```
    #[must_use]
    pub fn multiple_choice<I, S>(id: i64, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            text: text.into(),
            question_type: QuestionType::MultipleChoice,
            options: Some(options.into_iter().map(Into::into).collect()),
        }
    }
}

/// A survey definition, consumed read-only by the analytics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl Survey {
    /// Looks up a question by id.
    #[must_use]
    pub fn question(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple_choice\"");

        let back: QuestionType = serde_json::from_str("\"rating\"").unwrap();
        assert_eq!(back, QuestionType::Rating);
    }

    #[test]
    fn test_question_type_display_matches_wire_name() {
        assert_eq!(QuestionType::MultipleChoice.to_string(), "multiple_choice");
        assert_eq!(QuestionType::Date.to_string(), "date");
    }

    #[test]
    fn test_question_deserializes_from_schema_shape() {
        let json = r#"{"id": 3, "text": "Your age?", "type": "numeric"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, 3);
        assert_eq!(question.question_type, QuestionType::Numeric);
        assert!(question.options.is_none());
    }

    #[test]
    fn test_survey_question_lookup() {
        let survey = Survey {
            id: 1,
            title: "Product feedback".to_string(),
            description: None,
            questions: vec![
                Question::new(10, "Your age?", QuestionType::Numeric),
                Question::multiple_choice(11, "Favorite color?", ["Red", "Blue"]),
            ],
        };
        assert_eq!(survey.question(11).unwrap().id, 11);
        assert!(survey.question(99).is_none());
    }
}
