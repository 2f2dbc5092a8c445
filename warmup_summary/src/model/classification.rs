//!
//! Per-execution warmup classification.
//!

use std::str::FromStr;

///
/// Per-execution warmup classification.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Classification {
    /// No changepoints, the execution is steady from the first iteration.
    #[serde(rename = "flat")]
    Flat,
    /// The execution settles into a faster steady state.
    #[serde(rename = "warmup")]
    Warmup,
    /// The execution settles into a slower steady state.
    #[serde(rename = "slowdown")]
    Slowdown,
    /// The final segment is not equivalent to a steady state.
    #[serde(rename = "no steady state")]
    NoSteadyState,
    /// The execution did not finish in time.
    #[serde(rename = "timeout")]
    Timeout,
    /// The execution crashed.
    #[serde(rename = "errored")]
    Errored,
}

impl Classification {
    /// All classifications, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Flat,
        Self::Warmup,
        Self::Slowdown,
        Self::NoSteadyState,
        Self::Timeout,
        Self::Errored,
    ];

    ///
    /// Whether an execution with this classification has a steady-state segment.
    ///
    pub fn has_steady_state(&self) -> bool {
        match self {
            Self::Flat | Self::Warmup | Self::Slowdown => true,
            Self::NoSteadyState | Self::Timeout | Self::Errored => false,
        }
    }

    ///
    /// Returns the label used in data files and reports.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Warmup => "warmup",
            Self::Slowdown => "slowdown",
            Self::NoSteadyState => "no steady state",
            Self::Timeout => "timeout",
            Self::Errored => "errored",
        }
    }
}

impl FromStr for Classification {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|classification| classification.as_str() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown classification `{string}`. Supported classifications: {}",
                    Self::ALL
                        .iter()
                        .map(|classification| classification.as_str())
                        .collect::<Vec<&str>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
