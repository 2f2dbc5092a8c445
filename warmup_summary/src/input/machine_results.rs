//!
//! Raw results of every benchmark run on one machine.
//!

use std::collections::BTreeMap;

use crate::model::classification::Classification;
use crate::model::process_execution::ProcessExecution;

use super::error::Error;

///
/// Raw results of every benchmark run on one machine.
///
/// Each mapping is keyed by `benchmark:vm:variant` and indexed by process execution.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MachineResults {
    /// Per-iteration wallclock durations.
    #[serde(default)]
    pub wallclock_times: BTreeMap<String, Vec<Vec<f64>>>,
    /// Per-execution classifications.
    #[serde(default)]
    pub classifications: BTreeMap<String, Vec<Classification>>,
    /// Per-execution changepoint indexes.
    #[serde(default)]
    pub changepoints: BTreeMap<String, Vec<Vec<usize>>>,
    /// Per-execution segment means.
    #[serde(default)]
    pub changepoint_means: BTreeMap<String, Vec<Vec<f64>>>,
    /// Per-execution segment variances.
    #[serde(default)]
    pub changepoint_vars: BTreeMap<String, Vec<Vec<f64>>>,
    /// Per-execution outlier indexes.
    #[serde(default)]
    pub all_outliers: BTreeMap<String, Vec<Vec<usize>>>,
}

impl MachineResults {
    ///
    /// Merges another result set in, replacing benchmarks present in both.
    ///
    pub fn extend(&mut self, other: Self) {
        self.wallclock_times.extend(other.wallclock_times);
        self.classifications.extend(other.classifications);
        self.changepoints.extend(other.changepoints);
        self.changepoint_means.extend(other.changepoint_means);
        self.changepoint_vars.extend(other.changepoint_vars);
        self.all_outliers.extend(other.all_outliers);
    }

    ///
    /// Benchmark keys, sorted.
    ///
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.wallclock_times.keys().map(String::as_str)
    }

    ///
    /// Gathers the process executions of a benchmark from the parallel mappings.
    ///
    pub fn executions(&self, key: &str) -> Result<Vec<ProcessExecution>, Error> {
        let wallclock_times = Self::field(&self.wallclock_times, key, "wallclock_times", None)?;
        let count = Some(wallclock_times.len());
        let classifications = Self::field(&self.classifications, key, "classifications", count)?;
        let changepoints = Self::field(&self.changepoints, key, "changepoints", count)?;
        let changepoint_means =
            Self::field(&self.changepoint_means, key, "changepoint_means", count)?;
        let changepoint_vars = Self::field(&self.changepoint_vars, key, "changepoint_vars", count)?;
        let all_outliers = Self::field(&self.all_outliers, key, "all_outliers", count)?;

        Ok((0..wallclock_times.len())
            .map(|index| ProcessExecution {
                wallclock_times: wallclock_times[index].clone(),
                classification: classifications[index],
                changepoints: changepoints[index].clone(),
                changepoint_means: changepoint_means[index].clone(),
                changepoint_vars: changepoint_vars[index].clone(),
                outliers: all_outliers[index].clone(),
            })
            .collect())
    }

    ///
    /// Looks up a parallel mapping, checking its execution count.
    ///
    fn field<'a, T>(
        map: &'a BTreeMap<String, Vec<T>>,
        key: &str,
        field: &'static str,
        expected: Option<usize>,
    ) -> Result<&'a [T], Error> {
        let values = map.get(key).ok_or_else(|| Error::MissingField {
            key: key.to_owned(),
            field,
        })?;
        match expected {
            Some(expected) if expected != values.len() => Err(Error::ExecutionCount {
                key: key.to_owned(),
                field,
                expected,
                found: values.len(),
            }),
            _ => Ok(values.as_slice()),
        }
    }
}
