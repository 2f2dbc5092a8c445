//!
//! Aggregated summary of a benchmark on one VM.
//!

use crate::model::category::Category;
use crate::model::classification::Classification;
use crate::model::detailed_classification::DetailedClassification;
use crate::model::key::Key;
use crate::model::process_execution::ProcessExecution;
use crate::statistics::bootstrap::segment_samples::SegmentSamples;
use crate::statistics::bootstrap::Estimate;
use crate::statistics::bootstrap::Estimator;
use crate::statistics::median_iqr::median_iqr;
use crate::statistics::median_iqr::MedianIqr;

use super::error::Error;
use super::process_execution::ProcessExecutionSummary;
use super::settings::Settings;

///
/// Aggregated summary of a benchmark on one VM.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkSummary {
    /// Benchmark-wide classification.
    pub classification: Category,
    /// Occurrences of each classification.
    pub detailed_classification: DetailedClassification,

    /// Median 1-based iteration at which the steady state begins.
    pub steady_state_iteration: Option<f64>,
    /// Interquartile range of the steady-state iteration.
    pub steady_state_iteration_iqr: Option<(f64, f64)>,
    /// Steady-state iteration of each steady execution.
    pub steady_state_iteration_list: Vec<usize>,

    /// Median wallclock time spent before the steady state, in seconds.
    pub steady_state_time_to_reach_secs: Option<f64>,
    /// Interquartile range of the time to reach the steady state.
    pub steady_state_time_to_reach_secs_iqr: Option<(f64, f64)>,
    /// Time to reach the steady state of each steady execution.
    pub steady_state_time_to_reach_secs_list: Vec<f64>,

    /// Bootstrapped steady-state iteration time, in seconds.
    pub steady_state_time: Option<f64>,
    /// Confidence interval half-width of the steady-state iteration time.
    pub steady_state_time_ci: Option<f64>,
    /// Steady-state mean of each steady execution.
    pub steady_state_time_list: Vec<f64>,

    /// Raw detail of every execution.
    #[serde(rename = "process_executons")]
    pub process_executions: Vec<ProcessExecutionSummary>,
}

impl BenchmarkSummary {
    ///
    /// Aggregates the process executions of a benchmark.
    ///
    /// Returns `Ok(None)` if the benchmark must be skipped: there are no
    /// executions, or a steady execution is malformed or unmeasured.
    ///
    pub fn aggregate(
        key: &Key,
        executions: &[ProcessExecution],
        settings: &Settings,
        estimator: &dyn Estimator,
    ) -> Result<Option<Self>, Error> {
        let Some(classification) =
            Category::rollup(executions.iter().map(|execution| execution.classification))
        else {
            tracing::warn!("Skipping `{key}`: no process executions");
            return Ok(None);
        };
        let detailed_classification: DetailedClassification = executions
            .iter()
            .map(|execution| execution.classification)
            .collect();

        let mut steady_state_iteration_list = Vec::with_capacity(executions.len());
        let mut steady_state_time_to_reach_secs_list = Vec::with_capacity(executions.len());
        let mut steady_state_time_list = Vec::with_capacity(executions.len());
        let mut samples = SegmentSamples::default();
        for (index, execution) in executions.iter().enumerate() {
            if !execution.classification.has_steady_state() {
                continue;
            }
            if let Err(malformation) = execution.validate() {
                tracing::warn!("Skipping `{key}`: process execution {index} is malformed: {malformation}");
                return Ok(None);
            }

            let absolute_delta = settings.delta.absolute(execution.changepoint_means.as_slice());
            let steady_state = execution.steady_state(absolute_delta);
            let steady_start = execution
                .steady_start(steady_state.first_segment)
                .ok_or_else(|| Error::MissingChangepoint {
                    key: key.to_string(),
                    index,
                    classification: execution.classification,
                })?;

            samples.push(steady_state.samples);
            steady_state_time_list.push(steady_state.mean);
            steady_state_iteration_list.push(steady_start.iteration);
            steady_state_time_to_reach_secs_list.push(steady_start.time_to_reach_secs);
        }

        let (estimate, iteration, time_to_reach) = if detailed_classification.has_failures() {
            (None, None, None)
        } else if let Category::Flat = classification {
            let estimate = Self::bootstrap(key, samples, settings, estimator)?;
            (Some(estimate), None, None)
        } else {
            let estimate = Self::bootstrap(key, samples, settings, estimator)?;
            let iterations: Vec<f64> = steady_state_iteration_list
                .iter()
                .map(|iteration| *iteration as f64)
                .collect();
            let iteration = median_iqr(iterations.as_slice()).ok_or_else(|| {
                Error::NoSteadyIterations {
                    key: key.to_string(),
                }
            })?;
            let time_to_reach = median_iqr(steady_state_time_to_reach_secs_list.as_slice())
                .ok_or_else(|| Error::NoSteadyIterations {
                    key: key.to_string(),
                })?;
            (Some(estimate), Some(iteration), Some(time_to_reach))
        };
        tracing::debug!(
            "Summarized `{key}`: {classification}, {} process executions",
            executions.len()
        );

        Ok(Some(Self {
            classification,
            detailed_classification,

            steady_state_iteration: iteration.map(|MedianIqr { median, .. }| median),
            steady_state_iteration_iqr: iteration.map(|MedianIqr { iqr, .. }| iqr),
            steady_state_iteration_list,

            steady_state_time_to_reach_secs: time_to_reach.map(|MedianIqr { median, .. }| median),
            steady_state_time_to_reach_secs_iqr: time_to_reach.map(|MedianIqr { iqr, .. }| iqr),
            steady_state_time_to_reach_secs_list,

            steady_state_time: estimate.map(|estimate| estimate.point),
            steady_state_time_ci: estimate.map(|estimate| estimate.half_width),
            steady_state_time_list,

            process_executions: executions
                .iter()
                .enumerate()
                .map(|(index, execution)| ProcessExecutionSummary::new(index, execution))
                .collect(),
        }))
    }

    ///
    /// Number of executions with the given classification.
    ///
    pub fn count(&self, classification: Classification) -> usize {
        self.detailed_classification.get(classification)
    }

    ///
    /// Runs the estimator, failing if it produces nothing.
    ///
    fn bootstrap(
        key: &Key,
        samples: SegmentSamples,
        settings: &Settings,
        estimator: &dyn Estimator,
    ) -> Result<Estimate, Error> {
        estimator
            .estimate(samples, settings.quality)
            .ok_or_else(|| Error::BootstrapFailed {
                key: key.to_string(),
            })
    }
}
