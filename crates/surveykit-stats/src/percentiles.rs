use serde::{Deserialize, Serialize};

/// Quartile values of a dataset.
///
/// The three quartiles are the 25th, 50th and 75th percentiles, computed
/// with linear interpolation between order statistics. `q2` therefore
/// always equals the median.
///
/// # Examples
///
/// ```
/// use surveykit_stats::percentiles::Quartiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let quartiles = Quartiles::new(&values).unwrap();
/// assert_eq!(quartiles.q1, 2.0);
/// assert_eq!(quartiles.q2, 3.0);
/// assert_eq!(quartiles.q3, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// The 25th percentile.
    pub q1: f64,
    /// The 50th percentile (median).
    pub q2: f64,
    /// The 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from unsorted values.
    ///
    /// The values are sorted internally before computing the order
    /// statistics.
    ///
    /// # Returns
    ///
    /// * `Some(Quartiles)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes quartiles from pre-sorted values.
    ///
    /// Use this when you already have sorted data to avoid re-sorting.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use surveykit_stats::percentiles::Quartiles;
    ///
    /// let mut values = [5.0, 2.0, 8.0, 1.0];
    /// values.sort_by(f64::total_cmp);
    /// let quartiles = Quartiles::from_sorted(&values).unwrap();
    /// assert_eq!(quartiles.q1, 1.75);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        if sorted_values.is_empty() {
            return None;
        }
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        Some(Self {
            q1: compute_percentile(sorted_values, 25.0),
            q2: compute_percentile(sorted_values, 50.0),
            q3: compute_percentile(sorted_values, 75.0),
        })
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the two nearest order statistics:
/// for a dataset of n values, the k-th percentile sits at fractional rank
/// `k / 100 * (n - 1)`, and values on either side of that rank are blended
/// proportionally.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `percentile` - The percentile to compute (0.0 to 100.0)
///
/// # Returns
///
/// The interpolated value at the specified percentile. Returns `f64::NAN`
/// if the input is empty.
///
/// # Examples
///
/// ```
/// use surveykit_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 25.0), 1.75);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let rank = (percentile / 100.0) * (sorted_values.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted_values[lower];
    }
    let fraction = rank - lower as f64;
    sorted_values[lower] + fraction * (sorted_values[upper] - sorted_values[lower])
}
