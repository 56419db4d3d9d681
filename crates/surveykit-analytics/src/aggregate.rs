use std::collections::BTreeMap;

use surveykit_core::{AnswerShape, AnswerValue, ResponseRecord, Survey};

use crate::{
    EmptyResponseSetError,
    choice::analyze_choices,
    numeric::analyze_numeric,
    report::{QuestionAnalytics, SurveyAnalytics},
    text::analyze_text,
};

/// Aggregates submitted responses into a survey-level analytics report.
///
/// The question-id set is taken from the first response's answer map. For
/// each question, that question's answer is collected across all responses
/// (absent where a respondent skipped it) and dispatched to an analyzer by
/// the runtime shape of the first present answer: numbers to the numeric
/// analyzer, strings to the text analyzer, selection lists to the
/// multiple-choice analyzer. Shapes with no analyzer (booleans) produce an
/// empty record.
///
/// Dispatching by stored shape rather than declared question type is
/// deliberate: it tolerates heterogeneous or legacy stored answers. Use
/// [`compute_survey_analytics`] to additionally surface disagreements
/// between stored shapes and a survey's declared types.
///
/// # Errors
///
/// Returns [`EmptyResponseSetError`] when `responses` is empty, since no
/// question set can be inferred.
pub fn aggregate_responses(
    responses: &[ResponseRecord],
) -> Result<SurveyAnalytics, EmptyResponseSetError> {
    let first = responses.first().ok_or(EmptyResponseSetError)?;

    let mut question_analytics = BTreeMap::new();
    for &question_id in first.answers.keys() {
        let column: Vec<Option<&AnswerValue>> = responses
            .iter()
            .map(|record| record.answer(question_id))
            .collect();
        question_analytics.insert(question_id, analyze_column(&column));
    }

    Ok(SurveyAnalytics {
        total_responses: responses.len(),
        // Owned by the session layer; zero when that data is not tracked.
        completion_rate: 0.0,
        average_time: 0.0,
        question_analytics,
    })
}

/// Like [`aggregate_responses`], but checks each question's stored answer
/// shape against the survey's declared question type and emits a
/// `tracing` warning on disagreement.
///
/// The report itself is identical to [`aggregate_responses`]; the stored
/// shape stays authoritative for dispatch. The warning exists because a
/// silently misclassified column (say, numeric answers stored as strings)
/// is a data-quality problem the operator should hear about.
///
/// # Errors
///
/// Returns [`EmptyResponseSetError`] when `responses` is empty.
pub fn compute_survey_analytics(
    survey: &Survey,
    responses: &[ResponseRecord],
) -> Result<SurveyAnalytics, EmptyResponseSetError> {
    let report = aggregate_responses(responses)?;

    for &question_id in report.question_analytics.keys() {
        let Some(question) = survey.question(question_id) else {
            tracing::warn!(
                survey_id = survey.id,
                question_id,
                "stored responses reference a question the survey does not declare"
            );
            continue;
        };
        if let Some(answer) = first_present_answer(responses, question_id)
            && !answer.matches_type(question.question_type)
        {
            tracing::warn!(
                survey_id = survey.id,
                question_id,
                declared = %question.question_type,
                stored = %answer.shape(),
                "stored answer shape disagrees with declared question type"
            );
        }
    }

    Ok(report)
}

fn first_present_answer<'a>(
    responses: &'a [ResponseRecord],
    question_id: i64,
) -> Option<&'a AnswerValue> {
    responses
        .iter()
        .find_map(|record| record.answer(question_id))
}

/// Dispatches one question's answer column by the shape of its first
/// present answer. A column where everyone skipped yields an empty record.
fn analyze_column(column: &[Option<&AnswerValue>]) -> QuestionAnalytics {
    let Some(first) = column.iter().flatten().next() else {
        return QuestionAnalytics::Empty;
    };

    match first.shape() {
        AnswerShape::Number => QuestionAnalytics::Numeric(analyze_numeric(
            column.iter().map(|a| a.and_then(AnswerValue::as_number)),
        )),
        AnswerShape::Text => QuestionAnalytics::Text(analyze_text(
            column.iter().map(|a| a.and_then(AnswerValue::as_text)),
        )),
        AnswerShape::Selections => QuestionAnalytics::MultipleChoice(analyze_choices(
            column.iter().map(|a| a.and_then(AnswerValue::as_selections)),
        )),
        AnswerShape::Boolean => QuestionAnalytics::Empty,
    }
}
