use std::cmp::Reverse;

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Number of keywords reported per theme.
pub const KEYWORDS_PER_THEME: usize = 5;

/// Maximum number of clusters; actual K is `min(5, corpus size)`.
pub const MAX_CLUSTERS: usize = 5;

/// A latent theme extracted from a feedback corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub label: String,
    /// Representative terms, ranked by weight in the cluster centroid.
    pub keywords: Vec<String>,
    /// Fraction of the corpus assigned to this theme, in [0, 1]. Across
    /// all themes the frequencies sum to 1: clustering is a full
    /// partition.
    pub frequency: f64,
}

/// Result of partitioning a vectorized corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOutcome {
    /// Cluster index for each document, in corpus order.
    pub assignments: Vec<usize>,
    /// One centroid per cluster, in vector space.
    pub centroids: Vec<Vec<f64>>,
}

impl ClusterOutcome {
    /// Number of documents assigned to the given cluster.
    #[must_use]
    pub fn cluster_size(&self, cluster: usize) -> usize {
        self.assignments.iter().filter(|&&a| a == cluster).count()
    }
}

/// Partitions document vectors into `k` clusters with Lloyd's algorithm.
///
/// Centroid initialization draws `k` distinct documents using a `Pcg32`
/// seeded with `seed`, so runs are reproducible: the same vectors, `k` and
/// seed always yield the same outcome. Iteration stops when no document
/// changes cluster or after `max_iterations` rounds.
///
/// Every cluster ends non-empty: a cluster that loses all members steals
/// the document currently farthest from its assigned centroid. With
/// `k == vectors.len()` this degenerates to one document per cluster.
///
/// # Panics
///
/// Panics if `k` is zero or greater than the number of documents.
#[must_use]
pub fn cluster(vectors: &[Vec<f64>], k: usize, seed: u64, max_iterations: usize) -> ClusterOutcome {
    assert!(k >= 1, "cluster count must be at least 1");
    assert!(
        k <= vectors.len(),
        "cluster count cannot exceed document count"
    );

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..vectors.len()).collect();
    indices.shuffle(&mut rng);
    let mut centroids: Vec<Vec<f64>> = indices[..k]
        .iter()
        .map(|&i| vectors[i].clone())
        .collect();

    let mut assignments = vec![0usize; vectors.len()];
    for _ in 0..max_iterations {
        let mut next: Vec<usize> = vectors
            .iter()
            .map(|v| nearest_centroid(v, &centroids))
            .collect();
        repair_empty_clusters(vectors, &centroids, &mut next, k);

        let converged = next == assignments;
        assignments = next;
        centroids = recompute_centroids(vectors, &assignments, k);
        if converged {
            break;
        }
    }

    ClusterOutcome {
        assignments,
        centroids,
    }
}

/// Index of the closest centroid under squared Euclidean distance.
/// Ties resolve to the lowest cluster index.
fn nearest_centroid(vector: &[f64], centroids: &[Vec<f64>]) -> usize {
    centroids
        .iter()
        .enumerate()
        .map(|(index, centroid)| (index, squared_distance(vector, centroid)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Reassigns documents so that no cluster is empty.
///
/// For each empty cluster, the document farthest from its current
/// centroid (among clusters that can spare a member) is moved over.
fn repair_empty_clusters(
    vectors: &[Vec<f64>],
    centroids: &[Vec<f64>],
    assignments: &mut [usize],
    k: usize,
) {
    for cluster in 0..k {
        if assignments.iter().any(|&a| a == cluster) {
            continue;
        }
        let candidate = assignments
            .iter()
            .enumerate()
            .filter(|&(_, &assigned)| {
                assignments.iter().filter(|&&a| a == assigned).count() > 1
            })
            .map(|(document, &assigned)| {
                (document, squared_distance(&vectors[document], &centroids[assigned]))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(document, _)| document);
        if let Some(document) = candidate {
            assignments[document] = cluster;
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn recompute_centroids(vectors: &[Vec<f64>], assignments: &[usize], k: usize) -> Vec<Vec<f64>> {
    let width = vectors.first().map_or(0, Vec::len);
    let mut centroids = vec![vec![0.0; width]; k];
    let mut sizes = vec![0usize; k];
    for (vector, &cluster) in vectors.iter().zip(assignments) {
        sizes[cluster] += 1;
        for (total, value) in centroids[cluster].iter_mut().zip(vector) {
            *total += value;
        }
    }
    for (centroid, &size) in centroids.iter_mut().zip(&sizes) {
        if size > 0 {
            for total in centroid.iter_mut() {
                *total /= size as f64;
            }
        }
    }
    centroids
}

/// Ranks vocabulary terms by centroid weight and returns the top `count`.
///
/// Ties resolve to the lower term index, which is lexicographic order
/// since the vocabulary is stored sorted.
#[must_use]
pub fn top_terms(centroid: &[f64], vocabulary: &[String], count: usize) -> Vec<String> {
    let mut ranked: Vec<usize> = (0..centroid.len().min(vocabulary.len())).collect();
    ranked.sort_by(|&a, &b| {
        centroid[b]
            .total_cmp(&centroid[a])
            .then_with(|| a.cmp(&b))
    });
    ranked
        .into_iter()
        .take(count)
        .map(|index| vocabulary[index].clone())
        .collect()
}

/// Builds the theme list for a clustering outcome.
///
/// Themes are numbered in cluster-index order; `frequency` is the share
/// of documents assigned to each cluster.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn extract_themes(outcome: &ClusterOutcome, vocabulary: &[String]) -> Vec<Theme> {
    let corpus_size = outcome.assignments.len() as f64;
    outcome
        .centroids
        .iter()
        .enumerate()
        .map(|(index, centroid)| Theme {
            label: format!("Theme {}", index + 1),
            keywords: top_terms(centroid, vocabulary, KEYWORDS_PER_THEME),
            frequency: outcome.cluster_size(index) as f64 / corpus_size,
        })
        .collect()
}
