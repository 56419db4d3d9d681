use serde::{Deserialize, Serialize};
use surveykit_stats::{descriptive::DescriptiveStats, percentiles::Quartiles};

/// Statistical measures computed over one question's numeric answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties broken by first occurrence in input order.
    pub mode: f64,
    /// Sample standard deviation; 0.0 when exactly one value.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub quartiles: Quartiles,
}

/// Analytics record for a numeric question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericAnalytics {
    /// Count of non-absent answers.
    pub total_responses: usize,
    /// Absent when no respondent answered the question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<NumericStatistics>,
}

/// Analyzes one question's numeric answers.
///
/// Absent entries are filtered before any computation. An empty filtered
/// list produces a zero-response record with no statistics rather than an
/// error.
///
/// # Examples
///
/// ```
/// use surveykit_analytics::numeric::analyze_numeric;
///
/// let analytics = analyze_numeric([Some(1.0), None, Some(3.0), Some(2.0)]);
/// assert_eq!(analytics.total_responses, 3);
/// assert_eq!(analytics.statistics.unwrap().mean, 2.0);
/// ```
pub fn analyze_numeric<I>(answers: I) -> NumericAnalytics
where
    I: IntoIterator<Item = Option<f64>>,
{
    let values: Vec<f64> = answers.into_iter().flatten().collect();

    let Some(stats) = DescriptiveStats::new(&values) else {
        return NumericAnalytics {
            total_responses: 0,
            statistics: None,
        };
    };
    // DescriptiveStats succeeded, so the slice is non-empty.
    let quartiles = Quartiles::new(&values).unwrap();

    NumericAnalytics {
        total_responses: values.len(),
        statistics: Some(NumericStatistics {
            mean: stats.mean,
            median: stats.median,
            mode: stats.mode,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
            quartiles,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_through_five_scenario() {
        let analytics = analyze_numeric((1..=5).map(|v| Some(f64::from(v))));
        let stats = analytics.statistics.unwrap();
        assert_eq!(analytics.total_responses, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.quartiles.q1, 2.0);
        assert_eq!(stats.quartiles.q3, 4.0);
        assert!((stats.std_dev - 1.5811).abs() < 1e-4);
    }

    #[test]
    fn test_absent_answers_filtered() {
        let analytics = analyze_numeric([None, Some(10.0), None, Some(20.0)]);
        assert_eq!(analytics.total_responses, 2);
        assert_eq!(analytics.statistics.unwrap().mean, 15.0);
    }

    #[test]
    fn test_all_absent_yields_zero_record() {
        let analytics = analyze_numeric([None, None]);
        assert_eq!(analytics.total_responses, 0);
        assert!(analytics.statistics.is_none());
    }

    #[test]
    fn test_order_statistics_are_ordered() {
        let analytics = analyze_numeric([4.0, 9.0, 1.0, 7.0, 2.0, 6.0].map(Some));
        let stats = analytics.statistics.unwrap();
        assert!(stats.min <= stats.quartiles.q1);
        assert!(stats.quartiles.q1 <= stats.median);
        assert!(stats.median <= stats.quartiles.q3);
        assert!(stats.quartiles.q3 <= stats.max);
    }

    #[test]
    fn test_single_value_policy() {
        let analytics = analyze_numeric([Some(4.0)]);
        let stats = analytics.statistics.unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mode, 4.0);
    }
}
