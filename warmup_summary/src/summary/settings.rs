//!
//! Summarization settings.
//!

use crate::statistics::bootstrap::quality::Quality;
use crate::statistics::delta::Delta;

///
/// Summarization settings.
///
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Tolerance for segments equivalent to the steady state.
    pub delta: Delta,
    /// Bootstrap quality level.
    pub quality: Quality,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(delta: Delta, quality: Quality) -> Self {
        Self { delta, quality }
    }
}
