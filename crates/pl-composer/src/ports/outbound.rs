//! # Outbound Ports
//!
//! Trait for the external sampling backend. The core depends only on this
//! signature; it never implements or selects a concrete simulator.

use crate::domain::{ComposerError, OperationSequence};
use async_trait::async_trait;
use shared_types::FrequencyTable;

/// External sampling backend - outbound port.
///
/// Turns a composed operation sequence into an outcome frequency table by
/// executing it `shots` times. Invoked exactly once per pipeline run; the
/// core places no ordering requirement on the samples themselves.
#[async_trait]
pub trait Sampler: Send + Sync {
    /// Execute `sequence` for `shots` repetitions and return the aggregated
    /// outcome counts. The returned table's total must equal `shots`.
    async fn sample(
        &self,
        sequence: &OperationSequence,
        shots: u64,
    ) -> Result<FrequencyTable, ComposerError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock sampler for testing.
///
/// Distributes shots pseudo-randomly over the outcome space from a fixed
/// seed, so the same seed and sequence always yield the same table.
#[derive(Clone, Debug)]
pub struct MockSampler {
    /// RNG seed; same seed gives the same table.
    pub seed: u64,
    /// Should fail?
    pub should_fail: bool,
}

impl Default for MockSampler {
    fn default() -> Self {
        Self { seed: 42, should_fail: false }
    }
}

#[async_trait]
impl Sampler for MockSampler {
    async fn sample(
        &self,
        sequence: &OperationSequence,
        shots: u64,
    ) -> Result<FrequencyTable, ComposerError> {
        use rand::{Rng, SeedableRng};

        if self.should_fail {
            return Err(ComposerError::SamplerFailure("mock failure".to_string()));
        }
        sequence.validate()?;

        let width = sequence.layout.total_bits();
        let mut rng = rand::rngs::StdRng::seed_from_u64(self.seed);
        let mut table = FrequencyTable::new();
        for _ in 0..shots {
            let outcome: String =
                (0..width).map(|_| if rng.gen::<bool>() { '1' } else { '0' }).collect();
            table.record(outcome, 1);
        }
        Ok(table)
    }
}
