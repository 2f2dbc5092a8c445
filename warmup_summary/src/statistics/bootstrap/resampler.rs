//!
//! In-process bootstrap resampler.
//!

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::statistics::fsum;

use super::quality::Quality;
use super::segment_samples::SegmentSamples;
use super::Estimate;
use super::Estimator;

///
/// In-process bootstrap resampler.
///
/// Every round draws executions with replacement, then draws every steady
/// segment's samples with replacement. An execution contributes the mean of
/// its resampled segment means, and a round the mean over its executions.
///
#[derive(Debug, Clone, Copy)]
pub struct Resampler {
    /// Random generator seed.
    pub seed: u64,
    /// Two-sided confidence level.
    pub confidence: f64,
}

impl Resampler {
    /// The default confidence level.
    pub const CONFIDENCE: f64 = 0.99;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            confidence: Self::CONFIDENCE,
        }
    }

    ///
    /// Draws `segment.len()` samples with replacement and returns their mean.
    ///
    fn resampled_mean(rng: &mut Xoshiro256PlusPlus, segment: &[f64]) -> f64 {
        let mut sum = 0.0;
        for _ in 0..segment.len() {
            sum += segment[rng.gen_range(0..segment.len())];
        }
        sum / (segment.len() as f64)
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Estimator for Resampler {
    fn estimate(&self, samples: SegmentSamples, quality: Quality) -> Option<Estimate> {
        let executions: Vec<Vec<Vec<f64>>> = samples
            .into_inner()
            .into_iter()
            .map(|segments| {
                segments
                    .into_iter()
                    .filter(|segment| !segment.is_empty())
                    .collect::<Vec<Vec<f64>>>()
            })
            .collect();
        if executions.is_empty() || executions.iter().any(|segments| segments.is_empty()) {
            return None;
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        let rounds = quality.rounds();
        let mut round_means = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            let mut execution_means = Vec::with_capacity(executions.len());
            for _ in 0..executions.len() {
                let segments = &executions[rng.gen_range(0..executions.len())];
                let mut segment_means = Vec::with_capacity(segments.len());
                for segment in segments.iter() {
                    segment_means.push(Self::resampled_mean(&mut rng, segment.as_slice()));
                }
                execution_means.push(fsum(&segment_means) / (segment_means.len() as f64));
            }
            round_means.push(fsum(&execution_means) / (execution_means.len() as f64));
        }
        round_means.sort_by(f64::total_cmp);

        let tail = (1.0 - self.confidence) / 2.0;
        let lower_index = ((tail * rounds as f64).floor() as usize).min(rounds - 1);
        let upper_index = (((1.0 - tail) * rounds as f64).ceil() as usize)
            .saturating_sub(1)
            .min(rounds - 1);
        let point = fsum(&round_means) / (rounds as f64);
        let half_width = (round_means[upper_index] - round_means[lower_index]) / 2.0;
        if !point.is_finite() || !half_width.is_finite() {
            return None;
        }

        Some(Estimate { point, half_width })
    }
}
