//! End-to-end pipeline choreography: compose an operation sequence, sample
//! it through the injected backend, evaluate the footprint, report it.
//!
//! Data flows one direction with no feedback loop:
//! Composer -> Sampler -> FrequencyTable -> Evaluator -> report sink.

#![cfg(test)]

use pl_composer::{
    compose, ComposerError, MockSampler, Operation, PhysicalConstants, RegisterLayout, Sampler,
};
use pl_footprint::{
    evaluate_footprint, Classification, ConcentrationThreshold, FootprintError,
};
use pl_telemetry::report_footprint;
use shared_types::FrequencyTable;

const SHOTS: u64 = 1024;

#[tokio::test]
async fn test_full_pipeline_on_reference_layout() {
    let layout = RegisterLayout::reference();
    let sequence = compose(&layout, &PhysicalConstants::default()).unwrap();

    let sampler = MockSampler::default();
    let table = sampler.sample(&sequence, SHOTS).await.unwrap();
    assert_eq!(table.total() as u64, SHOTS);

    let report = evaluate_footprint(&table, ConcentrationThreshold::default()).unwrap();
    assert_eq!(report.total, SHOTS);
    assert!(report.ratio > 0.0 && report.ratio <= 1.0);

    // Reporting is a side-channel; it must never affect or fail the run.
    report_footprint(&report);
}

#[tokio::test]
async fn test_pipeline_is_deterministic_end_to_end() {
    let layout = RegisterLayout::new(2, 2, 2, 2).unwrap();
    let constants = PhysicalConstants::default();
    let sampler = MockSampler { seed: 99, should_fail: false };

    let run = || async {
        let sequence = compose(&layout, &constants).unwrap();
        sampler.sample(&sequence, SHOTS).await.unwrap()
    };
    let first = run().await;
    let second = run().await;
    assert_eq!(first, second);

    let a = evaluate_footprint(&first, ConcentrationThreshold::default()).unwrap();
    let b = evaluate_footprint(&second, ConcentrationThreshold::default()).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_sampler_failure_aborts_the_run() {
    let sequence =
        compose(&RegisterLayout::reference(), &PhysicalConstants::default()).unwrap();
    let sampler = MockSampler { should_fail: true, ..Default::default() };
    let err = sampler.sample(&sequence, SHOTS).await.unwrap_err();
    assert!(matches!(err, ComposerError::SamplerFailure(_)));
}

#[test]
fn test_sequence_survives_serialization_boundary() {
    // The operation sequence is the contract handed to an external backend;
    // a serialization round trip must preserve it exactly.
    let sequence =
        compose(&RegisterLayout::reference(), &PhysicalConstants::default()).unwrap();
    let json = serde_json::to_string_pretty(&sequence).unwrap();
    let back: pl_composer::OperationSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(sequence, back);
    assert_eq!(back.barrier_count(), 7);
}

#[test]
fn test_mock_distribution_over_eight_bits_is_fragmented() {
    // 1024 uniform draws over 256 outcomes leave no outcome near 15%.
    let table: FrequencyTable = {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        (0..SHOTS)
            .map(|_| {
                let outcome: String =
                    (0..8).map(|_| if rng.gen::<bool>() { '1' } else { '0' }).collect();
                (outcome, 1)
            })
            .collect()
    };
    let report = evaluate_footprint(&table, ConcentrationThreshold::default()).unwrap();
    assert_eq!(report.classification, Classification::Fragmented);
}

#[test]
fn test_malformed_table_from_backend_is_rejected_not_repaired() {
    let mut table = FrequencyTable::new();
    table.record("00000000", 100);
    table.record("11111111", -3);
    let err = evaluate_footprint(&table, ConcentrationThreshold::default()).unwrap_err();
    assert!(matches!(err, FootprintError::NegativeCount { count: -3, .. }));
}

#[test]
fn test_composed_stage_structure_matches_contract() {
    // Barriers partition the sequence into the seven published stages, and
    // every non-barrier operation references only in-range bits.
    let layout = RegisterLayout::new(3, 3, 3, 3).unwrap();
    let sequence = compose(&layout, &PhysicalConstants::default()).unwrap();

    assert_eq!(sequence.barrier_count(), 7);
    assert!(sequence.validate().is_ok());
    assert!(matches!(
        sequence.operations.last(),
        Some(Operation::Barrier { label }) if label.as_str() == "conditional-trade"
    ));
}
