use serde::{Deserialize, Serialize};

use crate::{
    EmptyCorpusError,
    cluster::{MAX_CLUSTERS, Theme, cluster, extract_themes},
    synthesize::{SuggestedQuestion, synthesize_question},
    vectorize::vectorize,
};

/// One row of an uploaded feedback table.
///
/// Only the `feedback` column is read; any other columns in the source
/// table are ignored on deserialization. A row with no feedback text is
/// treated as an empty document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRow {
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Tuning knobs for the feedback pipeline.
///
/// The seed is the determinism knob for clustering: the same corpus and
/// config always produce the same themes. It is deliberately explicit
/// configuration rather than a hidden default drawn from the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Seed for k-means centroid initialization.
    pub seed: u64,
    /// Iteration budget for k-means when it does not converge earlier.
    pub max_iterations: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_iterations: 100,
        }
    }
}

/// Themes and suggested follow-up questions for one feedback table.
///
/// Both sequences are in cluster-index order: `suggested_questions[i]`
/// was synthesized from `themes[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackAnalysis {
    pub themes: Vec<Theme>,
    pub suggested_questions: Vec<SuggestedQuestion>,
}

/// Runs the full feedback pipeline with the default configuration.
///
/// # Errors
///
/// Returns [`EmptyCorpusError`] when `rows` is empty.
pub fn analyze_feedback(rows: &[FeedbackRow]) -> Result<FeedbackAnalysis, EmptyCorpusError> {
    analyze_feedback_with(rows, FeedbackConfig::default())
}

/// Runs vectorization, clustering and question synthesis over one
/// feedback table.
///
/// The cluster count is `min(5, rows.len())`, which guarantees no empty
/// cluster for tiny corpora and caps compute cost for large ones. The
/// whole call is pure and synchronous; the corpus and vocabulary matrix
/// live in memory for its duration.
///
/// # Errors
///
/// Returns [`EmptyCorpusError`] when `rows` is empty; no vectorization is
/// attempted in that case.
pub fn analyze_feedback_with(
    rows: &[FeedbackRow],
    config: FeedbackConfig,
) -> Result<FeedbackAnalysis, EmptyCorpusError> {
    if rows.is_empty() {
        return Err(EmptyCorpusError);
    }

    let documents: Vec<String> = rows
        .iter()
        .map(|row| row.feedback.clone().unwrap_or_default())
        .collect();
    let vectors = vectorize(&documents);
    let k = MAX_CLUSTERS.min(documents.len());
    tracing::debug!(
        documents = documents.len(),
        vocabulary = vectors.vocabulary.len(),
        clusters = k,
        "clustering feedback corpus"
    );

    let outcome = cluster(&vectors.vectors, k, config.seed, config.max_iterations);
    let themes = extract_themes(&outcome, &vectors.vocabulary);
    let suggested_questions = themes
        .iter()
        .map(|theme| synthesize_question(&theme.keywords))
        .collect();

    Ok(FeedbackAnalysis {
        themes,
        suggested_questions,
    })
}
