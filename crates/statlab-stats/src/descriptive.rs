use std::collections::HashMap;

use serde::Serialize;

/// Descriptive statistics summarizing one dataset.
///
/// Dispersion uses the Bessel-corrected (n − 1) sample variance, and the same
/// convention flows through `std_dev` and the standardized sums inside
/// `skewness` and `kurtosis`. Degenerate inputs resolve to sentinel values
/// instead of errors: a single observation has variance 0, and the shape
/// statistics are 0 whenever their bias-correction denominators vanish
/// (n ≤ 2 for skewness, n ≤ 3 for kurtosis) or the standard deviation is 0.
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::DescriptiveStats;
///
/// let stats = DescriptiveStats::from_values(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.max, 5.0);
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.median, 3.0);
///
/// assert!(DescriptiveStats::from_values(&[]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The arithmetic mean.
    pub mean: f64,
    /// The middle of the sorted data; average of the two middle values at
    /// even length.
    pub median: f64,
    /// The most frequent value; ties resolve to the value encountered first.
    pub mode: f64,
    /// The Bessel-corrected sample variance.
    pub variance: f64,
    /// The square root of `variance`.
    pub std_dev: f64,
    /// The smallest observation.
    pub min: f64,
    /// The largest observation.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Adjusted Fisher–Pearson standardized third moment.
    pub skewness: f64,
    /// Bias-corrected excess kurtosis (normal distribution ⇒ 0).
    pub kurtosis: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics for a dataset.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty (the "no data yet" state)
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        let mean = mean(values);
        let variance = variance(values, mean);
        let std_dev = variance.sqrt();

        Some(Self {
            mean,
            median: median_of_sorted(&sorted),
            mode: mode(values),
            variance,
            std_dev,
            min,
            max,
            range: max - min,
            skewness: skewness(values, mean, std_dev),
            kurtosis: kurtosis(values, mean, std_dev),
        })
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    #[expect(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().sum::<f64>() / n
}

/// Bessel-corrected sample variance; 0 for fewer than two observations.
pub(crate) fn variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    #[expect(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Most frequent value, first-encountered among equally frequent ones.
fn mode(values: &[f64]) -> f64 {
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (index, value) in values.iter().enumerate() {
        let entry = counts.entry(value.to_bits()).or_insert((0, index));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .min_by_key(|&(_, (count, first_index))| (std::cmp::Reverse(count), first_index))
        .map_or(f64::NAN, |(bits, _)| f64::from_bits(bits))
}

/// Adjusted Fisher–Pearson skewness: [n/((n-1)(n-2))] Σ((xᵢ-x̄)/s)³.
///
/// 0 when the standard deviation is 0 or n ≤ 2 (coefficient undefined).
fn skewness(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 || values.len() <= 2 {
        return 0.0;
    }
    #[expect(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let sum: f64 = values.iter().map(|v| ((v - mean) / std_dev).powi(3)).sum();
    n / ((n - 1.0) * (n - 2.0)) * sum
}

/// Bias-corrected excess kurtosis:
/// [n(n+1)/((n-1)(n-2)(n-3))] Σ((xᵢ-x̄)/s)⁴ − 3(n-1)²/((n-2)(n-3)).
///
/// 0 when the standard deviation is 0 or n ≤ 3 (coefficient undefined).
fn kurtosis(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 || values.len() <= 3 {
        return 0.0;
    }
    #[expect(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let sum: f64 = values.iter().map(|v| ((v - mean) / std_dev).powi(4)).sum();
    n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * sum
        - 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0))
}
