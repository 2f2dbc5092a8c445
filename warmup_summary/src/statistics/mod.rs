//!
//! Statistics used to summarize warmup data.
//!

pub mod bootstrap;
pub mod delta;
pub mod median_iqr;

#[cfg(test)]
mod tests;

///
/// Sums values with Neumaier compensation.
///
/// Keeps long sums of small iteration times close to the exactly rounded result.
///
pub fn fsum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for value in values.iter().copied() {
        let total = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - total) + value;
        } else {
            compensation += (value - total) + sum;
        }
        sum = total;
    }
    sum + compensation
}
