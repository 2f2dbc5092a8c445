//!
//! Raw warmup results input.
//!

pub mod error;
pub mod machine_results;

use std::collections::BTreeMap;
use std::path::Path;

use self::error::Error as InputError;
use self::machine_results::MachineResults;

///
/// One raw results file.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Input {
    /// The machine the benchmarks were run on.
    pub machine: String,
    /// The results.
    #[serde(flatten)]
    pub results: MachineResults,
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}

///
/// Raw results of all input files, by machine.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataSet {
    /// Results by machine name.
    pub machines: BTreeMap<String, MachineResults>,
}

impl DataSet {
    ///
    /// Extends the data set with a results file.
    ///
    pub fn extend(&mut self, input: Input) {
        self.machines
            .entry(input.machine)
            .or_default()
            .extend(input.results);
    }
}

impl From<Input> for DataSet {
    fn from(input: Input) -> Self {
        let mut data_set = Self::default();
        data_set.extend(input);
        data_set
    }
}
