use serde::Serialize;

/// Descriptive statistics over a batch of non-negative counts.
///
/// Used for per-episode scores and step counts. Extremes are kept as exact
/// integers; the central and spread measures are `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of samples.
    pub count: usize,
    /// Smallest sample.
    pub min: usize,
    /// Largest sample.
    pub max: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median; the mean of the two middle samples for even counts.
    pub median: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes statistics from unsorted samples.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if there is at least one sample
    /// * `None` - if `values` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use serpent_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_counts([4, 1, 3, 2]).unwrap();
    /// assert_eq!(stats.min, 1);
    /// assert_eq!(stats.max, 4);
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.median, 2.5);
    /// ```
    #[must_use]
    pub fn from_counts<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();
        Self::from_sorted(&values)
    }

    /// Like [`Self::from_counts`], but skips sorting.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[usize]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted(),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().map(|v| *v as f64).sum::<f64>() / n;
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted_values[mid - 1] as f64 + sorted_values[mid] as f64) / 2.0
        } else {
            sorted_values[mid] as f64
        };
        let variance = sorted_values
            .iter()
            .map(|v| (*v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
