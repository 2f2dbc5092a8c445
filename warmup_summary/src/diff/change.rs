//!
//! Change of a metric between two runs.
//!

///
/// Change of a metric between two runs.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Change {
    /// Statistically indistinguishable.
    Same,
    /// Changed, but neither better nor worse.
    Different,
    /// Improved.
    Better,
    /// Regressed.
    Worse,
}

impl Change {
    ///
    /// Compares two estimates with uncertainty intervals, lower being better.
    ///
    /// Overlapping intervals are the same. An estimate defined in only one
    /// run is different.
    ///
    pub fn of_estimates(
        previous: Option<(f64, (f64, f64))>,
        current: Option<(f64, (f64, f64))>,
    ) -> Self {
        match (previous, current) {
            (None, None) => Self::Same,
            (Some(_), None) | (None, Some(_)) => Self::Different,
            (Some((previous, (previous_low, previous_high))), Some((current, (current_low, current_high)))) => {
                if current_low <= previous_high && previous_low <= current_high {
                    Self::Same
                } else if current < previous {
                    Self::Better
                } else {
                    Self::Worse
                }
            }
        }
    }

    ///
    /// Compares two spreads, narrower being better.
    ///
    /// Returns `None` unless both are defined.
    ///
    pub fn of_spreads(previous: Option<f64>, current: Option<f64>) -> Option<Self> {
        let (previous, current) = (previous?, current?);
        Some(if current < previous {
            Self::Better
        } else if current > previous {
            Self::Worse
        } else {
            Self::Same
        })
    }
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Same => write!(f, "SAME"),
            Self::Different => write!(f, "DIFFERENT"),
            Self::Better => write!(f, "BETTER"),
            Self::Worse => write!(f, "WORSE"),
        }
    }
}
