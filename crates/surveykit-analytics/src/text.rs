use std::{cmp::Reverse, collections::HashMap};

use serde::{Deserialize, Serialize};

/// Words scored +1 when computing answer polarity.
const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "best",
    "better",
    "brilliant",
    "clean",
    "clear",
    "convenient",
    "delightful",
    "easy",
    "effective",
    "efficient",
    "enjoy",
    "enjoyable",
    "excellent",
    "fantastic",
    "fast",
    "favorite",
    "friendly",
    "good",
    "great",
    "happy",
    "helpful",
    "impressive",
    "intuitive",
    "like",
    "love",
    "nice",
    "perfect",
    "pleasant",
    "pleased",
    "polished",
    "recommend",
    "reliable",
    "responsive",
    "satisfied",
    "simple",
    "smooth",
    "solid",
    "superb",
    "useful",
    "valuable",
    "wonderful",
];

/// Words scored -1 when computing answer polarity.
const NEGATIVE_WORDS: &[&str] = &[
    "annoying",
    "awful",
    "bad",
    "broken",
    "buggy",
    "clumsy",
    "confusing",
    "crash",
    "crashes",
    "difficult",
    "disappointed",
    "disappointing",
    "dislike",
    "expensive",
    "fail",
    "failed",
    "frustrating",
    "hard",
    "hate",
    "horrible",
    "inconsistent",
    "issue",
    "issues",
    "lacking",
    "laggy",
    "mediocre",
    "messy",
    "missing",
    "poor",
    "problem",
    "problems",
    "sad",
    "slow",
    "terrible",
    "ugly",
    "unhappy",
    "unreliable",
    "unusable",
    "useless",
    "worse",
    "worst",
    "wrong",
];

/// Sentiment summary over one question's text answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Mean per-answer polarity, in [-1, 1].
    pub average: f64,
    pub positive_responses: usize,
    pub negative_responses: usize,
    pub neutral_responses: usize,
}

/// Word-count summary over one question's text answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseLength {
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
}

/// One entry in the most-frequent-words ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Full text analysis of one question's answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub sentiment: SentimentSummary,
    pub response_length: ResponseLength,
    /// The 10 most frequent case-folded tokens, ties broken by first
    /// occurrence.
    pub common_words: Vec<WordCount>,
}

/// Analytics record for a text question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalytics {
    /// Count of non-absent answers.
    pub total_responses: usize,
    /// Absent when no respondent answered the question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<TextAnalysis>,
}

/// Scores the polarity of one text answer, in [-1, 1].
///
/// Tokens are case-folded and stripped of surrounding punctuation, then
/// matched against a small embedded lexicon. The score is
/// `(positive - negative) / (positive + negative)` over the matched
/// tokens; text with no sentiment-bearing words scores exactly 0.0
/// (neutral).
///
/// # Examples
///
/// ```
/// use surveykit_analytics::text::sentiment_polarity;
///
/// assert!(sentiment_polarity("Great product, love it!") > 0.0);
/// assert!(sentiment_polarity("Terrible, slow and buggy.") < 0.0);
/// assert_eq!(sentiment_polarity("It is a chair."), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sentiment_polarity(text: &str) -> f64 {
    let mut positive = 0usize;
    let mut negative = 0usize;
    for token in text.split_whitespace() {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if POSITIVE_WORDS.binary_search(&word.as_str()).is_ok() {
            positive += 1;
        } else if NEGATIVE_WORDS.binary_search(&word.as_str()).is_ok() {
            negative += 1;
        }
    }
    let matched = positive + negative;
    if matched == 0 {
        return 0.0;
    }
    (positive as f64 - negative as f64) / matched as f64
}

/// Analyzes one question's text answers.
///
/// Absent entries are dropped before analysis; empty strings are kept (an
/// empty text answer is a valid submission). An empty filtered list
/// produces a zero-response record with no analysis.
#[expect(clippy::cast_precision_loss)]
pub fn analyze_text<'a, I>(answers: I) -> TextAnalytics
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let answers: Vec<&str> = answers.into_iter().flatten().collect();
    if answers.is_empty() {
        return TextAnalytics {
            total_responses: 0,
            analysis: None,
        };
    }
    let total = answers.len();

    let polarities: Vec<f64> = answers.iter().map(|a| sentiment_polarity(a)).collect();
    let sentiment = SentimentSummary {
        average: polarities.iter().sum::<f64>() / total as f64,
        positive_responses: polarities.iter().filter(|&&p| p > 0.0).count(),
        negative_responses: polarities.iter().filter(|&&p| p < 0.0).count(),
        neutral_responses: polarities.iter().filter(|&&p| p == 0.0).count(),
    };

    let word_counts: Vec<usize> = answers
        .iter()
        .map(|a| a.split_whitespace().count())
        .collect();
    let response_length = ResponseLength {
        average_words: word_counts.iter().sum::<usize>() as f64 / total as f64,
        min_words: word_counts.iter().copied().min().unwrap_or(0),
        max_words: word_counts.iter().copied().max().unwrap_or(0),
    };

    TextAnalytics {
        total_responses: total,
        analysis: Some(TextAnalysis {
            sentiment,
            response_length,
            common_words: most_common_words(&answers, 10),
        }),
    }
}

/// Counts case-folded whitespace tokens across all answers and returns the
/// `limit` most frequent, ties broken by first occurrence.
///
/// No punctuation stripping or stopword removal happens here; the word
/// frequency report reflects the raw tokens respondents wrote.
fn most_common_words(answers: &[&str], limit: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut position = 0usize;
    for answer in answers {
        for token in answer.split_whitespace() {
            let word = token.to_lowercase();
            let entry = counts.entry(word).or_insert((0, position));
            entry.0 += 1;
            position += 1;
        }
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by_key(|&(_, count, first)| (Reverse(count), first));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count, _)| WordCount { word, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicons_are_sorted_for_binary_search() {
        assert!(POSITIVE_WORDS.is_sorted());
        assert!(NEGATIVE_WORDS.is_sorted());
    }

    #[test]
    fn test_polarity_bounds_and_sign() {
        let positive = sentiment_polarity("great fast reliable");
        assert_eq!(positive, 1.0);

        let negative = sentiment_polarity("slow and buggy");
        assert_eq!(negative, -1.0);

        let mixed = sentiment_polarity("great features but slow and buggy");
        assert!((-1.0..=1.0).contains(&mixed));
        assert!(mixed < 0.0);
    }

    #[test]
    fn test_polarity_strips_punctuation_for_matching() {
        assert!(sentiment_polarity("Love it!") > 0.0);
        assert!(sentiment_polarity("(terrible)") < 0.0);
    }

    #[test]
    fn test_sentiment_counts_partition_responses() {
        let answers = [
            Some("great product"),
            Some("terrible support"),
            Some("it is a thing"),
            Some("love the speed, hate the price"),
        ];
        let analytics = analyze_text(answers);
        let analysis = analytics.analysis.unwrap();
        let sentiment = &analysis.sentiment;
        assert_eq!(
            sentiment.positive_responses
                + sentiment.negative_responses
                + sentiment.neutral_responses,
            analytics.total_responses
        );
        // "love ... hate ..." balances to exactly zero, hence neutral.
        assert_eq!(sentiment.neutral_responses, 2);
    }

    #[test]
    fn test_word_counts() {
        let analytics = analyze_text([Some("one two three"), Some("one"), None]);
        let analysis = analytics.analysis.unwrap();
        assert_eq!(analytics.total_responses, 2);
        assert_eq!(analysis.response_length.average_words, 2.0);
        assert_eq!(analysis.response_length.min_words, 1);
        assert_eq!(analysis.response_length.max_words, 3);
    }

    #[test]
    fn test_empty_string_is_a_valid_answer() {
        let analytics = analyze_text([Some("")]);
        let analysis = analytics.analysis.unwrap();
        assert_eq!(analytics.total_responses, 1);
        assert_eq!(analysis.response_length.min_words, 0);
        assert_eq!(analysis.sentiment.neutral_responses, 1);
    }

    #[test]
    fn test_common_words_ranked_with_first_occurrence_ties() {
        let analytics = analyze_text([Some("beta alpha beta"), Some("alpha gamma delta")]);
        let words = analytics.analysis.unwrap().common_words;
        assert_eq!(words[0].word, "beta");
        assert_eq!(words[0].count, 2);
        assert_eq!(words[1].word, "alpha");
        assert_eq!(words[1].count, 2);
        // gamma and delta both appear once; gamma was seen first.
        assert_eq!(words[2].word, "gamma");
        assert_eq!(words[3].word, "delta");
    }

    #[test]
    fn test_common_words_case_folded_and_capped() {
        let text = "A a B b C c d e f g h i j k";
        let analytics = analyze_text([Some(text)]);
        let words = analytics.analysis.unwrap().common_words;
        assert_eq!(words.len(), 10);
        assert_eq!(words[0].word, "a");
        assert_eq!(words[0].count, 2);
    }

    #[test]
    fn test_all_absent_yields_zero_record() {
        let analytics = analyze_text([None, None]);
        assert_eq!(analytics.total_responses, 0);
        assert!(analytics.analysis.is_none());
    }
}
