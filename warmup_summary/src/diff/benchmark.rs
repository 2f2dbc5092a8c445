//!
//! Changes of a benchmark between two runs.
//!

use crate::summary::benchmark::BenchmarkSummary;

use super::change::Change;

///
/// Changes of a benchmark between two runs.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkDiff {
    /// Benchmark-wide classification.
    pub classification: Option<Change>,
    /// Steady-state iteration.
    pub steady_iteration: Option<Change>,
    /// Steady-state iteration interquartile range width.
    pub steady_iteration_variation: Option<Change>,
    /// Steady-state iteration time.
    pub steady_state_time: Option<Change>,
    /// Steady-state iteration time confidence interval.
    pub steady_state_time_variation: Option<Change>,
    /// Whether the benchmark was summarized in both runs.
    pub intersection: Change,
}

impl BenchmarkDiff {
    ///
    /// Compares a benchmark summarized in both runs.
    ///
    pub fn new(previous: &BenchmarkSummary, current: &BenchmarkSummary) -> Self {
        let classification = if previous.classification == current.classification {
            Change::Same
        } else {
            Change::Different
        };

        let steady_iteration = Change::of_estimates(
            Self::iteration_estimate(previous),
            Self::iteration_estimate(current),
        );
        let steady_iteration_variation = Change::of_spreads(
            previous
                .steady_state_iteration_iqr
                .map(|(low, high)| high - low),
            current
                .steady_state_iteration_iqr
                .map(|(low, high)| high - low),
        );

        let steady_state_time =
            Change::of_estimates(Self::time_estimate(previous), Self::time_estimate(current));
        let steady_state_time_variation =
            Change::of_spreads(previous.steady_state_time_ci, current.steady_state_time_ci);

        Self {
            classification: Some(classification),
            steady_iteration: Some(steady_iteration),
            steady_iteration_variation,
            steady_state_time: Some(steady_state_time),
            steady_state_time_variation,
            intersection: Change::Same,
        }
    }

    ///
    /// Marks a benchmark summarized in only one of the runs.
    ///
    pub fn skipped() -> Self {
        Self {
            classification: None,
            steady_iteration: None,
            steady_iteration_variation: None,
            steady_state_time: None,
            steady_state_time_variation: None,
            intersection: Change::Different,
        }
    }

    fn iteration_estimate(summary: &BenchmarkSummary) -> Option<(f64, (f64, f64))> {
        summary
            .steady_state_iteration
            .zip(summary.steady_state_iteration_iqr)
    }

    fn time_estimate(summary: &BenchmarkSummary) -> Option<(f64, (f64, f64))> {
        summary
            .steady_state_time
            .zip(summary.steady_state_time_ci)
            .map(|(time, ci)| (time, (time - ci, time + ci)))
    }
}
