//!
//! Tests for the summary statistics.
//!

use pretty_assertions::assert_eq;

use crate::statistics::bootstrap::quality::Quality;
use crate::statistics::bootstrap::resampler::Resampler;
use crate::statistics::bootstrap::segment_samples::SegmentSamples;
use crate::statistics::bootstrap::Estimator;
use crate::statistics::delta::Delta;
use crate::statistics::delta::Error as DeltaError;
use crate::statistics::fsum;
use crate::statistics::median_iqr::median_iqr;
use crate::statistics::median_iqr::MedianIqr;

#[test]
fn fsum_compensates_rounding() {
    let values = vec![0.1; 10];
    assert_eq!(fsum(values.as_slice()), 1.0);
    assert_eq!(fsum(&[1e100, 1.0, -1e100]), 1.0);
    assert_eq!(fsum(&[]), 0.0);
}

#[test]
fn delta_absolute() {
    let delta: Delta = "0.25s".parse().expect("Failed to parse delta");
    assert_eq!(delta, Delta::Absolute(0.25));
    assert_eq!(delta.absolute(&[4.0, 2.0]), 0.25);
    assert_eq!(delta.to_string(), "0.25s");
}

#[test]
fn delta_plain_number_scales_fastest_segment() {
    let delta: Delta = "0.5".parse().expect("Failed to parse delta");
    assert_eq!(delta, Delta::Relative(0.5));
    assert_eq!(delta.absolute(&[4.0, 2.0]), 1.0);
    assert_eq!(delta.to_string(), "0.5");
}

#[test]
fn delta_relative_to_fastest_segment() {
    let delta: Delta = "5%".parse().expect("Failed to parse delta");
    assert_eq!(delta, Delta::Relative(0.05));
    assert!((delta.absolute(&[4.0, 2.0, 3.0]) - 0.1).abs() < 1e-12);
    assert_eq!(delta.absolute(&[]), 0.0);
}

#[test]
fn delta_default() {
    assert_eq!(Delta::default(), Delta::Relative(0.001));
    assert!((Delta::default().absolute(&[2.0, 4.0]) - 0.002).abs() < 1e-12);
    let parsed: Delta = Delta::default()
        .to_string()
        .parse()
        .expect("Failed to parse delta");
    assert_eq!(parsed, Delta::default());
}

#[test]
fn delta_rejects_invalid_values() {
    assert!(matches!(
        "fast".parse::<Delta>(),
        Err(DeltaError::Parsing { .. })
    ));
    assert!(matches!(
        "-1".parse::<Delta>(),
        Err(DeltaError::OutOfRange { .. })
    ));
    assert!(matches!(
        "inf%".parse::<Delta>(),
        Err(DeltaError::OutOfRange { .. })
    ));
    assert!(matches!(
        "-0.5s".parse::<Delta>(),
        Err(DeltaError::OutOfRange { .. })
    ));
    assert!(matches!(
        "s".parse::<Delta>(),
        Err(DeltaError::Parsing { .. })
    ));
}

#[test]
fn median_iqr_interpolates() {
    assert_eq!(
        median_iqr(&[4.0, 1.0, 3.0, 2.0]),
        Some(MedianIqr {
            median: 2.5,
            iqr: (1.75, 3.25),
        })
    );
    assert_eq!(
        median_iqr(&[4.0, 4.0]),
        Some(MedianIqr {
            median: 4.0,
            iqr: (4.0, 4.0),
        })
    );
    assert_eq!(
        median_iqr(&[7.0]),
        Some(MedianIqr {
            median: 7.0,
            iqr: (7.0, 7.0),
        })
    );
}

#[test]
fn median_iqr_empty() {
    assert_eq!(median_iqr(&[]), None);
}

#[test]
fn quality_parsing() {
    let quality: Quality = "HIGH".parse().expect("Failed to parse quality");
    assert_eq!(quality, Quality::High);
    assert_eq!(Quality::default(), Quality::Low);
    assert_eq!(Quality::Low.rounds(), 1_000);
    assert_eq!(Quality::Medium.rounds(), 10_000);
    assert!("extreme".parse::<Quality>().is_err());
}

#[test]
fn resampler_constant_samples() {
    let samples = SegmentSamples::from(vec![
        vec![vec![2.0, 2.0, 2.0], vec![2.0, 2.0]],
        vec![vec![2.0, 2.0]],
    ]);
    let estimate = Resampler::default()
        .estimate(samples, Quality::Low)
        .expect("Failed to estimate");
    assert!((estimate.point - 2.0).abs() < 1e-12);
    assert!(estimate.half_width.abs() < 1e-12);
}

#[test]
fn resampler_is_deterministic() {
    let samples = SegmentSamples::from(vec![
        vec![vec![1.0, 1.2, 0.9, 1.1]],
        vec![vec![1.3, 1.25, 1.35], vec![1.2, 1.4]],
        vec![vec![0.95, 1.05, 1.0]],
    ]);
    let first = Resampler::new(42).estimate(samples.clone(), Quality::Low);
    let second = Resampler::new(42).estimate(samples, Quality::Low);
    assert_eq!(first, second);

    let estimate = first.expect("Failed to estimate");
    assert!(estimate.point > 0.9 && estimate.point < 1.35);
    assert!(estimate.half_width > 0.0);
}

#[test]
fn resampler_without_samples() {
    assert_eq!(
        Resampler::default().estimate(SegmentSamples::default(), Quality::Low),
        None
    );
    let samples = SegmentSamples::from(vec![vec![vec![1.0]], vec![vec![]]]);
    assert_eq!(Resampler::default().estimate(samples, Quality::Low), None);
}

#[test]
fn segment_samples_serialization() {
    let mut samples = SegmentSamples::default();
    samples.push(vec![vec![1.0, 2.0], vec![3.0]]);
    assert_eq!(samples.len(), 1);
    let json = serde_json::to_string(&samples).expect("Failed to serialize samples");
    assert_eq!(json, "[[[1.0,2.0],[3.0]]]");
}
