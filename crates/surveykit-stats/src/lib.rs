//! Statistical building blocks for survey analytics.
//!
//! This crate provides the numeric machinery that the per-question analyzers
//! are built on:
//!
//! - [`descriptive`]: Descriptive statistics (mean, median, mode, standard
//!   deviation, min, max) over `f64` datasets
//! - [`percentiles`]: Percentile and quartile computation with linear
//!   interpolation between order statistics
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use surveykit_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(&values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Computing quartiles
//!
//! ```
//! use surveykit_stats::percentiles::Quartiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let quartiles = Quartiles::new(&values).unwrap();
//! assert_eq!(quartiles.q1, 2.0);
//! assert_eq!(quartiles.q3, 4.0);
//! ```

pub mod descriptive;
pub mod percentiles;
