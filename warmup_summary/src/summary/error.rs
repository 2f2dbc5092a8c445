//!
//! Fatal summarization error.
//!

use crate::input::error::Error as InputError;
use crate::model::classification::Classification;

///
/// Fatal summarization error.
///
/// Any of these aborts the whole run, no partial summary is produced.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The data set does not describe exactly one machine.
    #[error("Cannot summarise data from {count} machines, expected exactly one")]
    MachineCount {
        /// Number of machines found.
        count: usize,
    },
    /// The bootstrap estimator produced no estimate.
    #[error("Bootstrap produced no steady-state estimate for `{key}`")]
    BootstrapFailed {
        /// The benchmark key.
        key: String,
    },
    /// Steady executions produced no steady iterations.
    #[error("No steady-state iterations collected for `{key}`, though no execution failed")]
    NoSteadyIterations {
        /// The benchmark key.
        key: String,
    },
    /// A non-flat steady execution has no changepoint to start its steady state at.
    #[error("Process execution {index} of `{key}` is `{classification}`, but has no changepoints")]
    MissingChangepoint {
        /// The benchmark key.
        key: String,
        /// The process execution index.
        index: usize,
        /// The process execution classification.
        classification: Classification,
    },
    /// The summary record was written by an incompatible version.
    #[error("Cannot process data from old format version `{found}`, expected `{expected}`")]
    FormatVersion {
        /// The version found in the record.
        found: String,
        /// The supported version.
        expected: &'static str,
    },
    /// Only one of the diff and the previous summary was supplied.
    #[error("A diff report needs both the diff and the previous summary")]
    DiffPairing,
    /// The raw data is inconsistent.
    #[error(transparent)]
    Input(#[from] InputError),
}
