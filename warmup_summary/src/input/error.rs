//!
//! Input data error.
//!

use std::path::PathBuf;

///
/// Input data error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing the input file.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
    /// A parallel mapping has no entry for a benchmark key.
    #[error("Benchmark `{key}` has no `{field}` data")]
    MissingField {
        /// The benchmark key.
        key: String,
        /// The mapping name.
        field: &'static str,
    },
    /// A parallel mapping disagrees on the number of process executions.
    #[error("Benchmark `{key}` has {expected} process executions, but {found} in `{field}`")]
    ExecutionCount {
        /// The benchmark key.
        key: String,
        /// The mapping name.
        field: &'static str,
        /// Number of executions in `wallclock_times`.
        expected: usize,
        /// Number of executions in the mapping.
        found: usize,
    },
}
