//! Free-text feedback analysis: theme extraction and question synthesis.
//!
//! Given a table of raw feedback strings, this crate extracts latent
//! themes and synthesizes follow-up survey questions from them:
//!
//! 1. [`vectorize`]: stopword-filtered TF-IDF document vectors
//! 2. [`cluster`]: seeded k-means partitioning with per-cluster keywords
//! 3. [`synthesize`]: keyword-triggered question templates
//! 4. [`pipeline`]: end-to-end orchestration of the three stages
//!
//! Clustering uses an explicitly seeded RNG, so the whole pipeline is
//! deterministic for a given corpus and [`FeedbackConfig`].
//!
//! # Example
//!
//! ```
//! use surveykit_feedback::{FeedbackRow, analyze_feedback};
//!
//! let rows: Vec<FeedbackRow> = [
//!     "The interface is clean and easy to use",
//!     "Too many bugs, the app crashes constantly",
//!     "Please improve the export feature",
//! ]
//! .iter()
//! .map(|text| FeedbackRow {
//!     feedback: Some((*text).to_string()),
//! })
//! .collect();
//!
//! let analysis = analyze_feedback(&rows).unwrap();
//! assert_eq!(analysis.themes.len(), 3);
//! assert_eq!(analysis.suggested_questions.len(), 3);
//! ```

pub use self::{
    cluster::{ClusterOutcome, Theme},
    pipeline::{
        FeedbackAnalysis, FeedbackConfig, FeedbackRow, analyze_feedback, analyze_feedback_with,
    },
    synthesize::{SuggestedQuestion, synthesize_question},
    vectorize::DocumentVectors,
};

pub mod cluster;
pub mod pipeline;
pub mod synthesize;
pub mod vectorize;

/// Feedback analysis was requested over a table with zero rows.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cannot analyze an empty feedback corpus")]
pub struct EmptyCorpusError;
