use std::{cmp::Reverse, collections::HashMap};

/// Cap on vocabulary size: only the most frequent informative terms are
/// kept.
pub const MAX_VOCABULARY: usize = 1000;

/// English stopwords removed before vocabulary construction.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours",
];

/// TF-IDF vectors for a feedback corpus.
///
/// `vectors` has one row per input document, each of `vocabulary.len()`
/// columns; `vocabulary` holds the terms in lexicographic order, so column
/// `j` of every row weights `vocabulary[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVectors {
    pub vocabulary: Vec<String>,
    pub vectors: Vec<Vec<f64>>,
}

impl DocumentVectors {
    /// Number of documents in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the corpus had zero documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Splits text into informative tokens: case-folded, alphanumeric runs of
/// at least two characters, stopwords removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| STOPWORDS.binary_search(token).is_err())
        .map(ToOwned::to_owned)
        .collect()
}

/// Builds TF-IDF document vectors for a feedback corpus.
///
/// The vocabulary keeps at most [`MAX_VOCABULARY`] terms, ranked by total
/// corpus frequency with ties broken lexicographically, and is stored in
/// lexicographic order. Term weights use smoothed inverse document
/// frequency (`ln((1 + N) / (1 + df)) + 1`) and every non-empty row is
/// L2-normalized; documents with no informative tokens map to the zero
/// vector.
///
/// Deterministic: the same corpus always produces the same vectors.
///
/// # Examples
///
/// ```
/// use surveykit_feedback::vectorize::vectorize;
///
/// let corpus = [
///     "the interface is clean".to_string(),
///     "the interface crashes".to_string(),
/// ];
/// let vectors = vectorize(&corpus);
/// assert_eq!(vectors.len(), 2);
/// assert!(vectors.vocabulary.contains(&"interface".to_string()));
/// assert!(!vectors.vocabulary.contains(&"the".to_string()));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn vectorize(documents: &[String]) -> DocumentVectors {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

    let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let mut seen: Vec<&str> = Vec::new();
        for token in tokens {
            *corpus_counts.entry(token).or_default() += 1;
            if !seen.contains(&token.as_str()) {
                seen.push(token);
                *document_frequency.entry(token).or_default() += 1;
            }
        }
    }

    // Most frequent informative terms first, ties lexicographic, then the
    // surviving vocabulary is stored sorted by term.
    let mut ranked: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
    ranked.sort_by_key(|&(term, count)| (Reverse(count), term));
    ranked.truncate(MAX_VOCABULARY);
    let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term.to_owned()).collect();
    vocabulary.sort_unstable();

    let term_index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(index, term)| (term.as_str(), index))
        .collect();

    let corpus_size = documents.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let df = document_frequency.get(term.as_str()).copied().unwrap_or(0) as f64;
            ((1.0 + corpus_size) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    let vectors = tokenized
        .iter()
        .map(|tokens| {
            let mut row = vec![0.0; vocabulary.len()];
            for token in tokens {
                if let Some(&index) = term_index.get(token.as_str()) {
                    row[index] += idf[index];
                }
            }
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in &mut row {
                    *weight /= norm;
                }
            }
            row
        })
        .collect();

    DocumentVectors {
        vocabulary,
        vectors,
    }
}
