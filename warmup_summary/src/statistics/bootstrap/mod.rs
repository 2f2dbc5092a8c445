//!
//! Bootstrap estimation of steady-state performance.
//!

pub mod quality;
pub mod resampler;
pub mod segment_samples;

use self::quality::Quality;
use self::segment_samples::SegmentSamples;

///
/// Steady-state performance estimate.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Point estimate, in seconds.
    pub point: f64,
    /// Confidence interval half-width, in seconds.
    pub half_width: f64,
}

///
/// Estimates steady-state performance of a benchmark from its steady segments.
///
pub trait Estimator {
    ///
    /// Returns `None` if no estimate can be produced.
    ///
    fn estimate(&self, samples: SegmentSamples, quality: Quality) -> Option<Estimate>;
}
