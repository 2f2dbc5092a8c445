//!
//! The versioned summary record.
//!

pub mod benchmark;
pub mod error;
pub mod process_execution;
pub mod settings;


use std::collections::BTreeMap;
use std::path::Path;

use crate::input::DataSet;
use crate::model::key::Key;
use crate::statistics::bootstrap::Estimator;

use self::benchmark::BenchmarkSummary;
use self::error::Error;
use self::settings::Settings;

///
/// Benchmark summaries of a machine, by VM and benchmark name.
///
pub type MachineSummary = BTreeMap<String, BTreeMap<String, BenchmarkSummary>>;

///
/// The versioned summary record.
///
/// Consumed by every renderer, and written as JSON for later diffs.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    /// Record format version.
    pub warmup_format_version: String,
    /// Summaries by machine.
    pub machines: BTreeMap<String, MachineSummary>,
}

impl Summary {
    /// The supported record format version.
    pub const FORMAT_VERSION: &'static str = "2";

    ///
    /// Summarizes every benchmark of the data set.
    ///
    /// The data set must describe exactly one machine. Benchmarks are
    /// processed in key order.
    ///
    pub fn collect(
        data_set: &DataSet,
        settings: &Settings,
        estimator: &dyn Estimator,
    ) -> Result<Self, Error> {
        let (machine, results) = match data_set.machines.iter().next() {
            Some(entry) if data_set.machines.len() == 1 => entry,
            _ => {
                return Err(Error::MachineCount {
                    count: data_set.machines.len(),
                })
            }
        };

        let mut vms = MachineSummary::new();
        for key in results.keys() {
            let parsed: Key = match key.parse() {
                Ok(parsed) => parsed,
                Err(error) => {
                    tracing::warn!("Skipping `{key}` from {machine}: {error}");
                    continue;
                }
            };
            let executions = results.executions(key)?;
            if let Some(summary) =
                BenchmarkSummary::aggregate(&parsed, executions.as_slice(), settings, estimator)?
            {
                vms.entry(parsed.vm)
                    .or_default()
                    .insert(parsed.benchmark, summary);
            }
        }

        Ok(Self {
            warmup_format_version: Self::FORMAT_VERSION.to_owned(),
            machines: BTreeMap::from([(machine.to_owned(), vms)]),
        })
    }

    ///
    /// Checks that the record can be consumed by this version.
    ///
    pub fn check_version(&self) -> Result<(), Error> {
        if self.warmup_format_version != Self::FORMAT_VERSION {
            return Err(Error::FormatVersion {
                found: self.warmup_format_version.clone(),
                expected: Self::FORMAT_VERSION,
            });
        }
        Ok(())
    }

    ///
    /// Returns the only machine of the record.
    ///
    pub fn machine(&self) -> Result<(&str, &MachineSummary), Error> {
        match self.machines.iter().next() {
            Some((name, machine)) if self.machines.len() == 1 => Ok((name.as_str(), machine)),
            _ => Err(Error::MachineCount {
                count: self.machines.len(),
            }),
        }
    }

    ///
    /// Returns a benchmark summary of the only machine.
    ///
    pub fn benchmark(&self, vm: &str, benchmark: &str) -> Option<&BenchmarkSummary> {
        self.machine()
            .ok()
            .and_then(|(_, machine)| machine.get(vm))
            .and_then(|benchmarks| benchmarks.get(benchmark))
    }
}

impl std::str::FromStr for Summary {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let value: serde_json::Value = serde_json::from_str(string)?;
        let found = value
            .get("warmup_format_version")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        if found != Self::FORMAT_VERSION {
            return Err(Error::FormatVersion {
                found: found.to_owned(),
                expected: Self::FORMAT_VERSION,
            }
            .into());
        }
        let summary: Self = serde_json::from_value(value)?;
        Ok(summary)
    }
}

impl TryFrom<&Path> for Summary {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Summary file {path:?} reading: {error}"))?;
        text.parse()
            .map_err(|error| anyhow::anyhow!("Summary file {path:?} parsing: {error}"))
    }
}
