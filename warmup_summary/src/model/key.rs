//!
//! Benchmark key, locating a benchmark variant on a VM.
//!

use std::str::FromStr;

///
/// Benchmark key, locating a benchmark variant on a VM.
///
/// Written as `benchmark:vm:variant` in data files.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    /// Benchmark name.
    pub benchmark: String,
    /// Virtual machine name.
    pub vm: String,
    /// Benchmark variant, e.g. the input size.
    pub variant: String,
}

impl FromStr for Key {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = string.split(':').collect();
        match parts.as_slice() {
            [benchmark, vm, variant] => Ok(Self {
                benchmark: (*benchmark).to_owned(),
                vm: (*vm).to_owned(),
                variant: (*variant).to_owned(),
            }),
            _ => anyhow::bail!(
                "Malformed benchmark key `{string}`: expected `benchmark:vm:variant`"
            ),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            benchmark,
            vm,
            variant,
        } = self;
        write!(f, "{benchmark}:{vm}:{variant}")
    }
}
