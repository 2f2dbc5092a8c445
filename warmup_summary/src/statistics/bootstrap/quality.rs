//!
//! Bootstrap quality level.
//!

use std::str::FromStr;

///
/// Bootstrap quality level.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// Fast, for interactive use.
    #[default]
    Low,
    /// Balanced.
    Medium,
    /// Slow, for publication.
    High,
}

impl Quality {
    ///
    /// Number of bootstrap rounds.
    ///
    pub fn rounds(&self) -> usize {
        match self {
            Self::Low => 1_000,
            Self::Medium => 10_000,
            Self::High => 100_000,
        }
    }
}

impl FromStr for Quality {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            string => anyhow::bail!(
                "Unknown bootstrap quality `{string}`. Supported qualities: {}",
                [Self::Low, Self::Medium, Self::High]
                    .into_iter()
                    .map(|quality| quality.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}
