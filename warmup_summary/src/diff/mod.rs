//!
//! Comparison of two summary records.
//!

pub mod benchmark;
pub mod change;


use std::collections::BTreeMap;

use crate::summary::error::Error;
use crate::summary::Summary;

use self::benchmark::BenchmarkDiff;

///
/// Comparison of two summary records.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Diff {
    /// Benchmark changes by VM and benchmark name.
    pub vms: BTreeMap<String, BTreeMap<String, BenchmarkDiff>>,
    /// `(benchmark, vm)` pairs summarized only in the current run.
    pub skipped_before: Vec<(String, String)>,
    /// `(benchmark, vm)` pairs summarized only in the previous run.
    pub skipped_after: Vec<(String, String)>,
}

impl Diff {
    ///
    /// Compares the current run against the previous one.
    ///
    pub fn new(previous: &Summary, current: &Summary) -> Result<Self, Error> {
        previous.check_version()?;
        current.check_version()?;
        let (_, previous_machine) = previous.machine()?;
        let (_, current_machine) = current.machine()?;

        let mut diff = Self::default();
        for (vm, current_benchmarks) in current_machine.iter() {
            let previous_benchmarks = previous_machine.get(vm);
            for (name, current_benchmark) in current_benchmarks.iter() {
                let entry = match previous_benchmarks.and_then(|benchmarks| benchmarks.get(name)) {
                    Some(previous_benchmark) => {
                        BenchmarkDiff::new(previous_benchmark, current_benchmark)
                    }
                    None => {
                        diff.skipped_before.push((name.to_owned(), vm.to_owned()));
                        BenchmarkDiff::skipped()
                    }
                };
                diff.vms
                    .entry(vm.to_owned())
                    .or_default()
                    .insert(name.to_owned(), entry);
            }
        }
        for (vm, previous_benchmarks) in previous_machine.iter() {
            for name in previous_benchmarks.keys() {
                let is_current = current_machine
                    .get(vm)
                    .is_some_and(|benchmarks| benchmarks.contains_key(name));
                if !is_current {
                    diff.skipped_after.push((name.to_owned(), vm.to_owned()));
                    diff.vms
                        .entry(vm.to_owned())
                        .or_default()
                        .insert(name.to_owned(), BenchmarkDiff::skipped());
                }
            }
        }

        Ok(diff)
    }

    ///
    /// Returns the changes of a benchmark.
    ///
    pub fn get(&self, vm: &str, benchmark: &str) -> Option<&BenchmarkDiff> {
        self.vms.get(vm).and_then(|benchmarks| benchmarks.get(benchmark))
    }

    ///
    /// Whether a benchmark was summarized in only one of the runs.
    ///
    pub fn is_skipped(&self, vm: &str, benchmark: &str) -> bool {
        self.skipped_before
            .iter()
            .chain(self.skipped_after.iter())
            .any(|(skipped_benchmark, skipped_vm)| skipped_benchmark == benchmark && skipped_vm == vm)
    }
}
