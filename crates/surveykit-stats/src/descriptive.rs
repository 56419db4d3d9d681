use std::{cmp::Reverse, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::percentiles::compute_percentile;

/// Descriptive statistics summarizing a dataset.
///
/// Contains common measures of central tendency and dispersion for a dataset
/// of `f64` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median (50th percentile, linearly interpolated).
    pub median: f64,
    /// The most frequent value. Ties are broken by first-encountered
    /// position in the input.
    pub mode: f64,
    /// The sample standard deviation. Defined as 0.0 for a single value.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in input order.
    ///
    /// Input order matters for the mode: when several values share the
    /// highest frequency, the one encountered first wins. The values are
    /// sorted internally for the order statistics.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use surveykit_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(&values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mode = mode(values);

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().copied().sum::<f64>() / n;
        let median = compute_percentile(&sorted, 50.0);
        // Sample standard deviation; a single observation has no spread.
        let std_dev = if count == 1 {
            0.0
        } else {
            let sum_sq = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        };

        Some(Self {
            min,
            max,
            mean,
            median,
            mode,
            std_dev,
        })
    }
}

/// Returns the most frequent value, breaking ties by first occurrence.
///
/// Values are keyed by their bit pattern, so `-0.0` and `0.0` count
/// separately. Callers only feed finite survey answers here.
fn mode(values: &[f64]) -> f64 {
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (position, value) in values.iter().enumerate() {
        let entry = counts.entry(value.to_bits()).or_insert((0, position));
        entry.0 += 1;
    }
    let (&bits, _) = counts
        .iter()
        .min_by_key(|&(_, &(count, first))| (Reverse(count), first))
        .unwrap();
    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_statistics() {
        let stats = DescriptiveStats::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert!((stats.std_dev - 1.5811).abs() < 1e-4);
    }

    #[test]
    fn test_single_value_has_zero_std_dev() {
        let stats = DescriptiveStats::new(&[42.0]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mode, 42.0);
        assert_eq!(stats.median, 42.0);
    }

    #[test]
    fn test_empty_input_returns_none() {
        assert!(DescriptiveStats::new(&[]).is_none());
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        let stats = DescriptiveStats::new(&[1.0, 2.0, 2.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.mode, 2.0);
    }

    #[test]
    fn test_mode_tie_broken_by_first_occurrence() {
        let stats = DescriptiveStats::new(&[3.0, 1.0, 3.0, 1.0]).unwrap();
        assert_eq!(stats.mode, 3.0);

        let stats = DescriptiveStats::new(&[1.0, 3.0, 3.0, 1.0]).unwrap();
        assert_eq!(stats.mode, 1.0);
    }

    #[test]
    fn test_median_of_even_count_interpolates() {
        let stats = DescriptiveStats::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_serialization_round_trip() {
        let stats = DescriptiveStats::new(&[1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_string(&stats).unwrap();
        let back: DescriptiveStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
