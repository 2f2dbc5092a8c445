//!
//! Benchmark-wide classification rolled up from its executions.
//!

use std::collections::BTreeSet;

use crate::model::classification::Classification;

///
/// Benchmark-wide classification rolled up from its executions.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Every execution is flat.
    #[serde(rename = "flat")]
    Flat,
    /// Every execution warms up.
    #[serde(rename = "warmup")]
    Warmup,
    /// Every execution slows down.
    #[serde(rename = "slowdown")]
    Slowdown,
    /// No execution reaches a steady state.
    #[serde(rename = "no steady state")]
    NoSteadyState,
    /// Every execution timed out.
    #[serde(rename = "timeout")]
    Timeout,
    /// Every execution crashed.
    #[serde(rename = "errored")]
    Errored,
    /// Executions are a mix of flat and warmup only.
    #[serde(rename = "good inconsistent")]
    GoodInconsistent,
    /// Any other mix of classifications.
    #[serde(rename = "bad inconsistent")]
    BadInconsistent,
}

impl Category {
    ///
    /// Rolls up per-execution classifications.
    ///
    /// Returns `None` if there are no executions.
    ///
    pub fn rollup<I>(classifications: I) -> Option<Self>
    where
        I: IntoIterator<Item = Classification>,
    {
        let distinct: BTreeSet<Classification> = classifications.into_iter().collect();
        let mut labels = distinct.iter().copied();
        match (labels.next(), labels.next(), labels.next()) {
            (None, _, _) => None,
            (Some(unanimous), None, _) => Some(unanimous.into()),
            (Some(Classification::Flat), Some(Classification::Warmup), None) => {
                Some(Self::GoodInconsistent)
            }
            _ => Some(Self::BadInconsistent),
        }
    }

    ///
    /// Whether the executions disagree.
    ///
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, Self::GoodInconsistent | Self::BadInconsistent)
    }

    ///
    /// Returns the underlying classification of a consistent benchmark.
    ///
    pub fn unanimous(&self) -> Option<Classification> {
        match self {
            Self::Flat => Some(Classification::Flat),
            Self::Warmup => Some(Classification::Warmup),
            Self::Slowdown => Some(Classification::Slowdown),
            Self::NoSteadyState => Some(Classification::NoSteadyState),
            Self::Timeout => Some(Classification::Timeout),
            Self::Errored => Some(Classification::Errored),
            Self::GoodInconsistent | Self::BadInconsistent => None,
        }
    }

    ///
    /// Returns the label used in data files and reports.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodInconsistent => "good inconsistent",
            Self::BadInconsistent => "bad inconsistent",
            category => category
                .unanimous()
                .map(|classification| classification.as_str())
                .unwrap_or_default(),
        }
    }
}

impl From<Classification> for Category {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Flat => Self::Flat,
            Classification::Warmup => Self::Warmup,
            Classification::Slowdown => Self::Slowdown,
            Classification::NoSteadyState => Self::NoSteadyState,
            Classification::Timeout => Self::Timeout,
            Classification::Errored => Self::Errored,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
