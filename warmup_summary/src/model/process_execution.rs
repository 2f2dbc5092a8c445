//!
//! A single process execution of a benchmark.
//!

use std::collections::BTreeSet;
use std::ops::Range;

use crate::model::classification::Classification;
use crate::statistics::fsum;

///
/// A single process execution of a benchmark.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessExecution {
    /// Per-iteration wallclock durations, in seconds.
    pub wallclock_times: Vec<f64>,
    /// Observed warmup behaviour.
    pub classification: Classification,
    /// Iteration indexes starting a new segment.
    pub changepoints: Vec<usize>,
    /// Mean of each segment, left to right.
    pub changepoint_means: Vec<f64>,
    /// Variance of each segment, left to right.
    pub changepoint_vars: Vec<f64>,
    /// Iteration indexes excluded from segment samples.
    pub outliers: Vec<usize>,
}

///
/// Structural defect of a process execution.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Malformation {
    /// The execution recorded no iterations.
    #[error("no measurements recorded")]
    NoMeasurements,
    /// Segment means and variances disagree in length.
    #[error("{means} segment means, but {vars} segment variances")]
    SegmentStatistics {
        /// Number of segment means.
        means: usize,
        /// Number of segment variances.
        vars: usize,
    },
    /// There must be exactly one segment more than changepoints.
    #[error("{changepoints} changepoints, but {means} segment means")]
    SegmentCount {
        /// Number of changepoints.
        changepoints: usize,
        /// Number of segment means.
        means: usize,
    },
    /// A changepoint lies past the last iteration.
    #[error("changepoint {changepoint} is out of {iterations} iterations")]
    ChangepointOutOfRange {
        /// The changepoint index.
        changepoint: usize,
        /// Number of recorded iterations.
        iterations: usize,
    },
}

///
/// The steady-state region of an execution.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyState {
    /// Index of the first segment equivalent to the final one.
    pub first_segment: usize,
    /// Unweighted mean of the steady segment means.
    pub mean: f64,
    /// Outlier-free samples of each steady segment, final segment first.
    pub samples: Vec<Vec<f64>>,
}

///
/// Where an execution reaches its steady state.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStart {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Wallclock time spent before that iteration, in seconds.
    pub time_to_reach_secs: f64,
}

impl ProcessExecution {
    ///
    /// Checks the segment invariants the steady-state analysis relies on.
    ///
    pub fn validate(&self) -> Result<(), Malformation> {
        if self.wallclock_times.is_empty() {
            return Err(Malformation::NoMeasurements);
        }
        if self.changepoint_means.len() != self.changepoint_vars.len() {
            return Err(Malformation::SegmentStatistics {
                means: self.changepoint_means.len(),
                vars: self.changepoint_vars.len(),
            });
        }
        if self.changepoint_means.len() != self.changepoints.len() + 1 {
            return Err(Malformation::SegmentCount {
                changepoints: self.changepoints.len(),
                means: self.changepoint_means.len(),
            });
        }
        if let Some(changepoint) = self
            .changepoints
            .iter()
            .copied()
            .find(|changepoint| *changepoint >= self.wallclock_times.len())
        {
            return Err(Malformation::ChangepointOutOfRange {
                changepoint,
                iterations: self.wallclock_times.len(),
            });
        }
        Ok(())
    }

    ///
    /// Finds the suffix of segments equivalent to the final one.
    ///
    /// Segments are folded right to left while their `mean ± var` range
    /// reaches the final segment's bounds; the walk stops at the first
    /// segment that does not.
    ///
    /// The execution must be valid, see [`Self::validate`].
    ///
    pub fn steady_state(&self, absolute_delta: f64) -> SteadyState {
        let outliers: BTreeSet<usize> = self.outliers.iter().copied().collect();
        let last = self.changepoint_means.len() - 1;

        let tail_start = self.changepoints.last().copied().unwrap_or_default();
        let mut samples = vec![self.samples(tail_start..self.wallclock_times.len(), &outliers)];

        let last_mean = self.changepoint_means[last];
        let last_var = self.changepoint_vars[last];
        let lower_bound = (last_mean - last_var).min(last_mean - absolute_delta);
        let upper_bound = (last_mean + last_var).max(last_mean + absolute_delta);

        let mut first_segment = last;
        for index in (0..last).rev() {
            let mean = self.changepoint_means[index];
            let var = self.changepoint_vars[index];
            let is_equivalent = mean + var >= lower_bound && mean - var <= upper_bound;
            if !is_equivalent {
                break;
            }
            samples.push(self.samples(self.segment_range(index), &outliers));
            first_segment = index;
        }

        let steady_means = &self.changepoint_means[first_segment..];
        SteadyState {
            first_segment,
            mean: fsum(steady_means) / (steady_means.len() as f64),
            samples,
        }
    }

    ///
    /// Locates the start of the steady state beginning at `first_segment`.
    ///
    /// Flat executions are steady from the first iteration. If every segment
    /// is steady, the last changepoint is used. Returns `None` for a non-flat
    /// execution without changepoints.
    ///
    pub fn steady_start(&self, first_segment: usize) -> Option<SteadyStart> {
        if let Classification::Flat = self.classification {
            return Some(SteadyStart {
                iteration: 1,
                time_to_reach_secs: 0.0,
            });
        }

        let changepoint = match first_segment.checked_sub(1) {
            Some(index) => self.changepoints.get(index),
            None => self.changepoints.last(),
        }
        .copied()?;
        let warmup = &self.wallclock_times[..changepoint.min(self.wallclock_times.len())];
        Some(SteadyStart {
            iteration: changepoint + 1,
            time_to_reach_secs: fsum(warmup),
        })
    }

    ///
    /// Iteration range of a segment that is not the final one.
    ///
    /// The range ends at the changepoint inclusively.
    ///
    fn segment_range(&self, index: usize) -> Range<usize> {
        let start = match index {
            0 => 0,
            index => self.changepoints[index - 1] + 1,
        };
        start..self.changepoints[index] + 1
    }

    ///
    /// Wallclock samples of an iteration range, without outliers.
    ///
    fn samples(&self, range: Range<usize>, outliers: &BTreeSet<usize>) -> Vec<f64> {
        let end = range.end.min(self.wallclock_times.len());
        (range.start..end)
            .filter(|index| !outliers.contains(index))
            .map(|index| self.wallclock_times[index])
            .collect()
    }
}
