//!
//! Everything a renderer needs to lay out a report.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use regex::Regex;

use crate::diff::Diff;
use crate::summary::benchmark::BenchmarkSummary;
use crate::summary::error::Error;
use crate::summary::Summary;

///
/// Everything a renderer needs to lay out a report.
///
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// The summary to render.
    pub summary: &'a Summary,
    /// Changes against the previous run.
    pub diff: Option<&'a Diff>,
    /// The previous run.
    pub previous: Option<&'a Summary>,
    /// Restricts the rendered VMs.
    pub vm_filter: Option<&'a Regex>,
    /// Whether LaTeX output is a standalone document.
    pub latex_preamble: bool,
    /// Whether LaTeX output uses a page-breaking table.
    pub latex_longtable: bool,
}

///
/// A comparison against the previous run.
///
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    /// Changes against the previous run.
    pub diff: &'a Diff,
    /// The previous run.
    pub previous: &'a Summary,
}

impl<'a> Report<'a> {
    ///
    /// A shortcut constructor for a plain report.
    ///
    pub fn new(summary: &'a Summary) -> Self {
        Self {
            summary,
            diff: None,
            previous: None,
            vm_filter: None,
            latex_preamble: false,
            latex_longtable: false,
        }
    }

    ///
    /// Returns the comparison, if any.
    ///
    /// The diff and the previous summary must be supplied together.
    ///
    pub fn comparison(&self) -> Result<Option<Comparison<'a>>, Error> {
        match (self.diff, self.previous) {
            (Some(diff), Some(previous)) => {
                previous.check_version()?;
                Ok(Some(Comparison { diff, previous }))
            }
            (None, None) => Ok(None),
            _ => Err(Error::DiffPairing),
        }
    }

    ///
    /// Returns the machine name and its VMs passing the filter, sorted.
    ///
    pub fn vms(
        &self,
    ) -> Result<(&'a str, Vec<(&'a str, &'a BTreeMap<String, BenchmarkSummary>)>), Error> {
        self.summary.check_version()?;
        let (machine, vms) = self.summary.machine()?;
        let vms = vms
            .iter()
            .filter(|(vm, _)| {
                self.vm_filter
                    .map(|filter| filter.is_match(vm.as_str()))
                    .unwrap_or(true)
            })
            .map(|(vm, benchmarks)| (vm.as_str(), benchmarks))
            .collect();
        Ok((machine, vms))
    }

    ///
    /// Returns the names of all benchmarks of the rendered VMs, sorted.
    ///
    pub fn benchmark_names(&self) -> Result<BTreeSet<&'a str>, Error> {
        let (_, vms) = self.vms()?;
        Ok(vms
            .into_iter()
            .flat_map(|(_, benchmarks)| benchmarks.keys().map(String::as_str))
            .collect())
    }
}
