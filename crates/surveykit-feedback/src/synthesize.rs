use serde::{Deserialize, Serialize};
use surveykit_core::QuestionType;

/// A follow-up survey question generated from a theme's keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedQuestion {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// The keywords the question was derived from.
    pub source_keywords: Vec<String>,
}

/// One row of the template rule chain: if any trigger word appears in the
/// keywords, the template applies.
struct TemplateRule {
    triggers: &'static [&'static str],
    template: &'static str,
}

/// Rule chain evaluated top-to-bottom; the first match wins. Kept as an
/// ordered table so the priority order stays auditable.
const RULES: &[TemplateRule] = &[
    TemplateRule {
        triggers: &["problem", "issue", "bug"],
        template: "How often do you experience issues with the {aspect}?",
    },
    TemplateRule {
        triggers: &["like", "love", "hate", "prefer"],
        template: "How satisfied are you with the {aspect}?",
    },
    TemplateRule {
        triggers: &["important", "critical", "essential"],
        template: "How important is the {aspect} to you?",
    },
    TemplateRule {
        triggers: &["improve", "suggest", "recommend"],
        template: "What suggestions do you have for improving the {aspect}?",
    },
];

/// Fallback when no trigger word matches.
const DEFAULT_TEMPLATE: &str = "On a scale of 1-5, how would you rate the {aspect}?";

/// Synthesizes a follow-up question from a theme's keyword list.
///
/// The rule chain above is evaluated in order and the first matching
/// template wins; the question's aspect is the first two keywords joined
/// with `" and "`. A template that mentions a numeric scale yields a
/// `rating` question, any other a `text` question.
///
/// # Examples
///
/// ```
/// use surveykit_core::QuestionType;
/// use surveykit_feedback::synthesize_question;
///
/// let keywords: Vec<String> = ["bug", "export"].iter().map(|s| (*s).to_string()).collect();
/// let question = synthesize_question(&keywords);
/// assert_eq!(question.text, "How often do you experience issues with the bug and export?");
/// assert_eq!(question.question_type, QuestionType::Text);
/// ```
#[must_use]
pub fn synthesize_question(keywords: &[String]) -> SuggestedQuestion {
    let template = RULES
        .iter()
        .find(|rule| {
            rule.triggers
                .iter()
                .any(|trigger| keywords.iter().any(|keyword| keyword == trigger))
        })
        .map_or(DEFAULT_TEMPLATE, |rule| rule.template);

    let aspect = keywords
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" and ");

    SuggestedQuestion {
        text: template.replace("{aspect}", &aspect),
        question_type: if template.contains("scale") {
            QuestionType::Rating
        } else {
            QuestionType::Text
        },
        source_keywords: keywords.to_vec(),
    }
}
