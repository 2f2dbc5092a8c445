//!
//! Raw detail of a process execution, kept for audit.
//!

use crate::model::classification::Classification;
use crate::model::process_execution::ProcessExecution;

///
/// Raw detail of a process execution, kept for audit.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessExecutionSummary {
    /// Position of the execution in the input.
    pub index: usize,
    /// Observed warmup behaviour.
    pub classification: Classification,
    /// Excluded iteration indexes.
    pub outliers: Vec<usize>,
    /// Segment boundaries.
    pub changepoints: Vec<usize>,
    /// Segment means.
    pub segment_means: Vec<f64>,
}

impl ProcessExecutionSummary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(index: usize, execution: &ProcessExecution) -> Self {
        Self {
            index,
            classification: execution.classification,
            outliers: execution.outliers.clone(),
            changepoints: execution.changepoints.clone(),
            segment_means: execution.changepoint_means.clone(),
        }
    }
}
