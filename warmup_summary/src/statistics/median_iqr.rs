//!
//! Median and interquartile range.
//!

///
/// Median and interquartile range of a sample.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianIqr {
    /// The 50th percentile.
    pub median: f64,
    /// The 25th and 75th percentiles.
    pub iqr: (f64, f64),
}

///
/// Computes the median and interquartile range.
///
/// Percentiles interpolate linearly between the closest ranks.
/// Returns `None` for an empty sample.
///
pub fn median_iqr(values: &[f64]) -> Option<MedianIqr> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(MedianIqr {
        median: percentile(sorted.as_slice(), 50.0),
        iqr: (
            percentile(sorted.as_slice(), 25.0),
            percentile(sorted.as_slice(), 75.0),
        ),
    })
}

///
/// Linear-interpolation percentile of a sorted non-empty sample.
///
fn percentile(sorted: &[f64], percent: f64) -> f64 {
    let rank = percent / 100.0 * ((sorted.len() - 1) as f64);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - (lower as f64);
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
