use std::{cmp::Reverse, collections::HashMap};

use serde::{Deserialize, Serialize};

/// Count and share of one choice across a question's responses.
///
/// `percentage` is relative to the number of response records, not the
/// number of selections: a respondent who picked three options still
/// counts once in the denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceFrequency {
    pub choice: String,
    pub count: usize,
    pub percentage: f64,
}

/// Frequency analysis of one question's multiple-choice answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceAnalysis {
    /// Per-choice frequencies in first-occurrence order.
    pub frequencies: Vec<ChoiceFrequency>,
    /// The most selected choice; ties broken by first occurrence among
    /// distinct choices.
    pub most_common: String,
    /// Number of distinct choices selected at least once.
    pub unique_selections: usize,
    pub average_selections_per_response: f64,
}

/// Analytics record for a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceAnalytics {
    /// Count of response records with at least one selection.
    pub total_responses: usize,
    /// Absent when no respondent made any selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ChoiceAnalysis>,
}

/// Analyzes one question's multiple-choice answers.
///
/// Each answer is the selection list of one response record; a respondent
/// who picked a single option contributes a one-element list. Absent and
/// empty answers are filtered first, then all selections are flattened
/// into one multiset. Duplicate selections within an answer are counted,
/// not deduplicated.
///
/// # Examples
///
/// ```
/// use surveykit_analytics::choice::analyze_choices;
///
/// let answers = [
///     Some(vec!["Blue".to_string()]),
///     Some(vec!["Blue".to_string()]),
///     Some(vec!["Red".to_string()]),
/// ];
/// let analytics = analyze_choices(answers);
/// let analysis = analytics.analysis.unwrap();
/// assert_eq!(analysis.most_common, "Blue");
/// assert_eq!(analysis.frequencies[0].count, 2);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn analyze_choices<I>(answers: I) -> ChoiceAnalytics
where
    I: IntoIterator<Item = Option<Vec<String>>>,
{
    let answers: Vec<Vec<String>> = answers
        .into_iter()
        .flatten()
        .filter(|selections| !selections.is_empty())
        .collect();
    if answers.is_empty() {
        return ChoiceAnalytics {
            total_responses: 0,
            analysis: None,
        };
    }
    let total = answers.len();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    // Distinct choices in the order they were first selected.
    let mut order: Vec<&str> = Vec::new();
    let mut selection_count = 0usize;
    for selections in &answers {
        for choice in selections {
            selection_count += 1;
            let choice = choice.as_str();
            let count = counts.entry(choice).or_insert_with(|| {
                order.push(choice);
                0
            });
            *count += 1;
        }
    }

    let frequencies: Vec<ChoiceFrequency> = order
        .iter()
        .map(|&choice| {
            let count = counts[choice];
            ChoiceFrequency {
                choice: choice.to_string(),
                count,
                percentage: (count as f64 / total as f64) * 100.0,
            }
        })
        .collect();

    // min_by_key keeps the first of equal elements, so ties resolve to the
    // earliest-selected choice.
    let most_common = frequencies
        .iter()
        .min_by_key(|f| Reverse(f.count))
        .map(|f| f.choice.clone())
        .unwrap_or_default();

    ChoiceAnalytics {
        total_responses: total,
        analysis: Some(ChoiceAnalysis {
            unique_selections: frequencies.len(),
            most_common,
            frequencies,
            average_selections_per_response: selection_count as f64 / total as f64,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(choice: &str) -> Option<Vec<String>> {
        Some(vec![choice.to_string()])
    }

    #[test]
    fn test_blue_blue_red_scenario() {
        let analytics = analyze_choices([single("Blue"), single("Blue"), single("Red")]);
        let analysis = analytics.analysis.unwrap();
        assert_eq!(analytics.total_responses, 3);
        assert_eq!(analysis.most_common, "Blue");
        assert_eq!(analysis.unique_selections, 2);

        let blue = &analysis.frequencies[0];
        assert_eq!(blue.choice, "Blue");
        assert_eq!(blue.count, 2);
        assert!((blue.percentage - 200.0 / 3.0).abs() < 1e-9);

        let red = &analysis.frequencies[1];
        assert_eq!(red.choice, "Red");
        assert_eq!(red.count, 1);
        assert!((red.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_multi_selection_counts_record_once() {
        let analytics = analyze_choices([
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            single("A"),
        ]);
        let analysis = analytics.analysis.unwrap();
        assert_eq!(analytics.total_responses, 2);
        // A selected in both records: 2 of 2 records.
        assert_eq!(analysis.frequencies[0].percentage, 100.0);
        assert_eq!(analysis.average_selections_per_response, 2.0);
    }

    #[test]
    fn test_selection_count_is_conserved() {
        let answers = [
            Some(vec!["A".to_string(), "B".to_string()]),
            single("B"),
            Some(vec!["C".to_string(), "A".to_string(), "B".to_string()]),
        ];
        let expected: usize = answers
            .iter()
            .map(|a| a.as_ref().map_or(0, Vec::len))
            .sum();

        let analysis = analyze_choices(answers).analysis.unwrap();
        let counted: usize = analysis.frequencies.iter().map(|f| f.count).sum();
        assert_eq!(counted, expected);
        assert_eq!(analysis.average_selections_per_response, expected as f64 / 3.0);
    }

    #[test]
    fn test_duplicates_within_answer_are_counted() {
        let analytics = analyze_choices([Some(vec!["A".to_string(), "A".to_string()])]);
        let analysis = analytics.analysis.unwrap();
        assert_eq!(analysis.frequencies[0].count, 2);
        assert_eq!(analysis.unique_selections, 1);
    }

    #[test]
    fn test_most_common_tie_broken_by_first_occurrence() {
        let analytics = analyze_choices([single("Red"), single("Blue"), single("Blue"), single("Red")]);
        let analysis = analytics.analysis.unwrap();
        assert_eq!(analysis.most_common, "Red");
    }

    #[test]
    fn test_absent_and_empty_answers_filtered() {
        let analytics = analyze_choices([None, Some(vec![]), single("A")]);
        assert_eq!(analytics.total_responses, 1);
        assert_eq!(analytics.analysis.unwrap().frequencies[0].percentage, 100.0);
    }

    #[test]
    fn test_no_selections_yields_zero_record() {
        let analytics = analyze_choices([None, Some(vec![])]);
        assert_eq!(analytics.total_responses, 0);
        assert!(analytics.analysis.is_none());
    }
}
