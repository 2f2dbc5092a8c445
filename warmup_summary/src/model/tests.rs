//!
//! Tests for the warmup data model.
//!

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::model::category::Category;
use crate::model::classification::Classification;
use crate::model::detailed_classification::DetailedClassification;
use crate::model::key::Key;
use crate::model::process_execution::Malformation;
use crate::model::process_execution::ProcessExecution;
use crate::model::process_execution::SteadyStart;

fn execution(
    classification: Classification,
    wallclock_times: Vec<f64>,
    changepoints: Vec<usize>,
    changepoint_means: Vec<f64>,
    changepoint_vars: Vec<f64>,
) -> ProcessExecution {
    ProcessExecution {
        wallclock_times,
        classification,
        changepoints,
        changepoint_means,
        changepoint_vars,
        outliers: vec![],
    }
}

fn warmup() -> ProcessExecution {
    execution(
        Classification::Warmup,
        vec![10.0, 10.0, 10.0, 1.0, 1.0, 1.0],
        vec![3],
        vec![10.0, 1.0],
        vec![0.0, 0.0],
    )
}

#[test]
fn classification_labels() {
    for classification in Classification::ALL.into_iter() {
        let parsed: Classification = classification
            .as_str()
            .parse()
            .expect("Failed to parse classification");
        assert_eq!(parsed, classification);
    }
    let json = serde_json::to_string(&Classification::NoSteadyState)
        .expect("Failed to serialize classification");
    assert_eq!(json, r#""no steady state""#);
    assert!("steady".parse::<Classification>().is_err());
}

#[test]
fn steady_state_bearing_classifications() {
    assert!(Classification::Flat.has_steady_state());
    assert!(Classification::Warmup.has_steady_state());
    assert!(Classification::Slowdown.has_steady_state());
    assert!(!Classification::NoSteadyState.has_steady_state());
    assert!(!Classification::Timeout.has_steady_state());
    assert!(!Classification::Errored.has_steady_state());
}

#[test]
fn rollup_unanimous() {
    let category = Category::rollup([Classification::Warmup, Classification::Warmup]);
    assert_eq!(category, Some(Category::Warmup));
    assert_eq!(Category::Warmup.unanimous(), Some(Classification::Warmup));
}

#[test]
fn rollup_good_inconsistent() {
    let category = Category::rollup([Classification::Warmup, Classification::Flat]);
    assert_eq!(category, Some(Category::GoodInconsistent));
    assert!(Category::GoodInconsistent.is_inconsistent());
    assert_eq!(Category::GoodInconsistent.unanimous(), None);
}

#[test]
fn rollup_bad_inconsistent() {
    let category = Category::rollup([
        Classification::Flat,
        Classification::Warmup,
        Classification::Errored,
    ]);
    assert_eq!(category, Some(Category::BadInconsistent));
    let category = Category::rollup([Classification::Slowdown, Classification::Warmup]);
    assert_eq!(category, Some(Category::BadInconsistent));
}

#[test]
fn rollup_empty() {
    assert_eq!(Category::rollup(Vec::<Classification>::new()), None);
}

#[test]
fn category_serialization() {
    let json = serde_json::to_string(&Category::GoodInconsistent)
        .expect("Failed to serialize category");
    assert_eq!(json, r#""good inconsistent""#);
}

#[test]
fn detailed_classification_has_all_keys() {
    let detailed: DetailedClassification =
        [Classification::Warmup, Classification::Warmup].into_iter().collect();
    let value = serde_json::to_value(detailed).expect("Failed to serialize counts");
    assert_eq!(
        value,
        serde_json::json!({
            "flat": 0,
            "warmup": 2,
            "slowdown": 0,
            "no steady state": 0,
            "timeout": 0,
            "errored": 0,
        })
    );
    assert_eq!(detailed.total(), 2);
    assert!(!detailed.has_failures());
}

#[test]
fn detailed_classification_most_common() {
    let detailed: DetailedClassification = [
        Classification::Errored,
        Classification::Warmup,
        Classification::Flat,
        Classification::Warmup,
    ]
    .into_iter()
    .collect();
    assert_eq!(
        detailed.most_common(),
        vec![
            (Classification::Warmup, 2),
            (Classification::Flat, 1),
            (Classification::Errored, 1),
        ]
    );
    assert!(detailed.has_failures());
}

#[test]
fn key_parsing() {
    let key: Key = "fasta:PyPy:default-python".parse().expect("Failed to parse key");
    assert_eq!(key.benchmark, "fasta");
    assert_eq!(key.vm, "PyPy");
    assert_eq!(key.variant, "default-python");
    assert_eq!(key.to_string(), "fasta:PyPy:default-python");

    assert!("fasta:PyPy".parse::<Key>().is_err());
    assert!("a:b:c:d".parse::<Key>().is_err());
}

#[test]
fn steady_state_stops_at_first_different_segment() {
    let execution = warmup();
    execution.validate().expect("Failed to validate execution");

    let steady_state = execution.steady_state(0.0);
    assert_eq!(steady_state.first_segment, 1);
    assert_eq!(steady_state.mean, 1.0);
    assert_eq!(steady_state.samples, vec![vec![1.0, 1.0, 1.0]]);

    let steady_start = execution.steady_start(steady_state.first_segment);
    assert_eq!(
        steady_start,
        Some(SteadyStart {
            iteration: 4,
            time_to_reach_secs: 30.0,
        })
    );
}

#[test]
fn steady_state_folds_equivalent_segments() {
    let execution = execution(
        Classification::Warmup,
        vec![5.0, 5.0, 2.1, 2.1, 2.0, 2.0, 2.0],
        vec![1, 3],
        vec![5.0, 2.1, 2.0],
        vec![0.0, 0.0, 0.0],
    );

    let steady_state = execution.steady_state(0.2);
    assert_eq!(steady_state.first_segment, 1);
    assert!((steady_state.mean - 2.05).abs() < 1e-12);
    assert_eq!(
        steady_state.samples,
        vec![vec![2.1, 2.0, 2.0, 2.0], vec![2.1, 2.1]]
    );

    let steady_start = execution
        .steady_start(steady_state.first_segment)
        .expect("Failed to locate steady state");
    assert_eq!(steady_start.iteration, 2);
    assert_eq!(steady_start.time_to_reach_secs, 5.0);
}

#[test]
fn steady_state_uses_variance_bounds() {
    let execution = execution(
        Classification::Warmup,
        vec![3.0, 3.0, 1.0, 1.0],
        vec![1],
        vec![3.0, 1.0],
        vec![1.5, 0.5],
    );

    let steady_state = execution.steady_state(0.0);
    assert_eq!(steady_state.first_segment, 0);
    assert_eq!(steady_state.mean, 2.0);
}

#[test]
fn steady_start_wraps_to_last_changepoint() {
    let execution = execution(
        Classification::Slowdown,
        vec![1.0, 1.0, 1.0, 1.0, 1.0],
        vec![1, 2],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 0.0, 0.0],
    );

    let steady_state = execution.steady_state(0.0);
    assert_eq!(steady_state.first_segment, 0);
    let steady_start = execution
        .steady_start(steady_state.first_segment)
        .expect("Failed to locate steady state");
    assert_eq!(steady_start.iteration, 3);
    assert_eq!(steady_start.time_to_reach_secs, 2.0);
}

#[test]
fn steady_start_of_flat_execution() {
    let execution = execution(
        Classification::Flat,
        vec![1.0, 1.1, 0.9],
        vec![],
        vec![1.0],
        vec![0.01],
    );

    let steady_state = execution.steady_state(0.001);
    assert_eq!(steady_state.first_segment, 0);
    assert_eq!(steady_state.samples, vec![vec![1.0, 1.1, 0.9]]);
    assert_eq!(
        execution.steady_start(steady_state.first_segment),
        Some(SteadyStart {
            iteration: 1,
            time_to_reach_secs: 0.0,
        })
    );
}

#[test]
fn steady_start_without_changepoints() {
    let execution = execution(
        Classification::Warmup,
        vec![1.0, 1.0],
        vec![],
        vec![1.0],
        vec![0.0],
    );
    assert_eq!(execution.steady_start(0), None);
}

#[test]
fn outliers_are_excluded_from_samples() {
    let mut execution = warmup();
    execution.outliers = vec![4, 0];

    let steady_state = execution.steady_state(0.0);
    assert_eq!(steady_state.samples, vec![vec![1.0, 1.0]]);
}

#[test]
fn validate_rejects_malformed_executions() {
    let mut execution = warmup();
    execution.changepoint_vars.pop();
    assert_eq!(
        execution.validate(),
        Err(Malformation::SegmentStatistics { means: 2, vars: 1 })
    );

    let mut execution = warmup();
    execution.changepoints.push(4);
    assert_eq!(
        execution.validate(),
        Err(Malformation::SegmentCount {
            changepoints: 2,
            means: 2,
        })
    );

    let mut execution = warmup();
    execution.changepoints = vec![6];
    assert_eq!(
        execution.validate(),
        Err(Malformation::ChangepointOutOfRange {
            changepoint: 6,
            iterations: 6,
        })
    );

    let mut execution = warmup();
    execution.wallclock_times.clear();
    assert_eq!(execution.validate(), Err(Malformation::NoMeasurements));
}

fn classification_strategy() -> impl Strategy<Value = Classification> {
    proptest::sample::select(Classification::ALL.to_vec())
}

proptest! {
    #[test]
    fn rollup_ignores_execution_order(
        mut classifications in proptest::collection::vec(classification_strategy(), 1..12),
    ) {
        let category = Category::rollup(classifications.iter().copied());
        classifications.reverse();
        prop_assert_eq!(Category::rollup(classifications.iter().copied()), category);
    }

    #[test]
    fn rollup_matches_distinct_labels(
        classifications in proptest::collection::vec(classification_strategy(), 1..12),
    ) {
        let distinct: std::collections::BTreeSet<Classification> =
            classifications.iter().copied().collect();
        let category = Category::rollup(classifications.iter().copied())
            .expect("Always present for non-empty input");
        let is_good = distinct
            == [Classification::Flat, Classification::Warmup].into_iter().collect();
        prop_assert_eq!(category == Category::GoodInconsistent, is_good);
        prop_assert_eq!(
            category == Category::BadInconsistent,
            distinct.len() > 1 && !is_good
        );
        prop_assert_eq!(category.is_inconsistent(), distinct.len() > 1);
    }

    #[test]
    fn detailed_classification_sums_to_executions(
        classifications in proptest::collection::vec(classification_strategy(), 0..32),
    ) {
        let detailed: DetailedClassification = classifications.iter().copied().collect();
        prop_assert_eq!(detailed.total(), classifications.len());
    }
}
