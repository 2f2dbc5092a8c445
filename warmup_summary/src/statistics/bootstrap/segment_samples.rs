//!
//! Steady segment samples of every execution of a benchmark.
//!

///
/// Steady segment samples of every execution of a benchmark.
///
/// Executions keep their index order; each holds its steady segments,
/// final segment first, and each segment its outlier-free wallclock times.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SegmentSamples(Vec<Vec<Vec<f64>>>);

impl SegmentSamples {
    ///
    /// Appends the steady segments of the next execution.
    ///
    pub fn push(&mut self, segments: Vec<Vec<f64>>) {
        self.0.push(segments);
    }

    ///
    /// Number of executions.
    ///
    pub fn len(&self) -> usize {
        self.0.len()
    }

    ///
    /// Whether there are no executions.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// Returns the executions.
    ///
    pub fn executions(&self) -> &[Vec<Vec<f64>>] {
        self.0.as_slice()
    }

    ///
    /// Returns the inner collection.
    ///
    pub fn into_inner(self) -> Vec<Vec<Vec<f64>>> {
        self.0
    }
}

impl From<Vec<Vec<Vec<f64>>>> for SegmentSamples {
    fn from(executions: Vec<Vec<Vec<f64>>>) -> Self {
        Self(executions)
    }
}
