//! Statistics used to summarize batches of episodes.
//!
//! - [`descriptive`]: Descriptive statistics (min, max, mean, median, spread)
//!
//! # Example
//!
//! ```
//! use serpent_stats::descriptive::DescriptiveStats;
//!
//! let scores = [3, 0, 5, 2, 4];
//! let stats = DescriptiveStats::from_counts(scores).unwrap();
//! assert_eq!(stats.count, 5);
//! assert_eq!(stats.mean, 2.8);
//! ```

pub mod descriptive;
