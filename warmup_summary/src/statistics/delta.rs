//!
//! Tolerance policy for equivalent segments.
//!

use std::str::FromStr;

///
/// Delta policy parsing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The value is not a number.
    #[error("Delta `{value}` is not a number: {error}")]
    Parsing {
        /// The original value.
        value: String,
        /// The underlying error.
        error: std::num::ParseFloatError,
    },
    /// The value is negative or not finite.
    #[error("Delta `{value}` must be a finite non-negative number")]
    OutOfRange {
        /// The original value.
        value: String,
    },
}

///
/// Tolerance policy for equivalent segments.
///
/// Written as a fraction of the fastest segment mean, e.g. `0.001`, or as a
/// percentage of it, e.g. `5%`. A trailing `s` gives fixed seconds, e.g.
/// `0.002s`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta {
    /// Fixed tolerance in seconds.
    Absolute(f64),
    /// Fraction of the fastest segment mean.
    Relative(f64),
}

impl Default for Delta {
    fn default() -> Self {
        Self::Relative(0.001)
    }
}

impl Delta {
    ///
    /// Resolves the tolerance in seconds using the fastest segment of an execution.
    ///
    pub fn absolute(&self, segment_means: &[f64]) -> f64 {
        match self {
            Self::Absolute(seconds) => *seconds,
            Self::Relative(fraction) => {
                let fastest = segment_means.iter().copied().fold(f64::INFINITY, f64::min);
                if fastest.is_finite() {
                    fastest * fraction
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for Delta {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let trimmed = string.trim();
        let (number, scale): (&str, fn(f64) -> Self) =
            if let Some(number) = trimmed.strip_suffix('%') {
                (number, |value| Self::Relative(value / 100.0))
            } else if let Some(number) = trimmed.strip_suffix('s') {
                (number, Self::Absolute)
            } else {
                (trimmed, Self::Relative)
            };
        let value: f64 = number.trim().parse().map_err(|error| Error::Parsing {
            value: string.to_owned(),
            error,
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(Error::OutOfRange {
                value: string.to_owned(),
            });
        }
        Ok(scale(value))
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute(seconds) => write!(f, "{seconds}s"),
            Self::Relative(fraction) => write!(f, "{fraction}"),
        }
    }
}
