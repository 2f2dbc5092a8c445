//!
//! Occurrence counts of every classification in a benchmark.
//!

use crate::model::classification::Classification;

///
/// Occurrence counts of every classification in a benchmark.
///
/// All six labels are always present, zero-filled.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DetailedClassification {
    /// Flat executions.
    pub flat: usize,
    /// Warmup executions.
    pub warmup: usize,
    /// Slowdown executions.
    pub slowdown: usize,
    /// Executions without a steady state.
    #[serde(rename = "no steady state")]
    pub no_steady_state: usize,
    /// Timed out executions.
    pub timeout: usize,
    /// Crashed executions.
    pub errored: usize,
}

impl DetailedClassification {
    ///
    /// Increments the counter of `classification`.
    ///
    pub fn add(&mut self, classification: Classification) {
        *self.counter_mut(classification) += 1;
    }

    ///
    /// Returns the counter of `classification`.
    ///
    pub fn get(&self, classification: Classification) -> usize {
        match classification {
            Classification::Flat => self.flat,
            Classification::Warmup => self.warmup,
            Classification::Slowdown => self.slowdown,
            Classification::NoSteadyState => self.no_steady_state,
            Classification::Timeout => self.timeout,
            Classification::Errored => self.errored,
        }
    }

    ///
    /// Total number of executions.
    ///
    pub fn total(&self) -> usize {
        Classification::ALL
            .iter()
            .map(|classification| self.get(*classification))
            .sum()
    }

    ///
    /// Whether any execution has no steady-state segment.
    ///
    pub fn has_failures(&self) -> bool {
        self.no_steady_state > 0 || self.timeout > 0 || self.errored > 0
    }

    ///
    /// Non-zero counters, most frequent first.
    ///
    /// Ties keep the reporting order of [`Classification::ALL`].
    ///
    pub fn most_common(&self) -> Vec<(Classification, usize)> {
        let mut counts: Vec<(Classification, usize)> = Classification::ALL
            .into_iter()
            .map(|classification| (classification, self.get(classification)))
            .filter(|(_, count)| *count > 0)
            .collect();
        counts.sort_by(|(_, a), (_, b)| b.cmp(a));
        counts
    }

    fn counter_mut(&mut self, classification: Classification) -> &mut usize {
        match classification {
            Classification::Flat => &mut self.flat,
            Classification::Warmup => &mut self.warmup,
            Classification::Slowdown => &mut self.slowdown,
            Classification::NoSteadyState => &mut self.no_steady_state,
            Classification::Timeout => &mut self.timeout,
            Classification::Errored => &mut self.errored,
        }
    }
}

impl FromIterator<Classification> for DetailedClassification {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut detailed = Self::default();
        for classification in iter {
            detailed.add(classification);
        }
        detailed
    }
}
