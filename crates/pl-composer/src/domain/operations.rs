//! # Operation Records
//!
//! The typed, ordered operation sequence the composer hands to an external
//! execution backend. The sequence is self-describing: it carries the
//! register layout it was composed against, so a backend can size its state
//! vector and a consumer can re-validate index bounds without out-of-band
//! context.

use super::errors::ComposerError;
use super::layout::{RegisterGroup, RegisterLayout};
use serde::{Deserialize, Serialize};

/// Single-bit rotation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationKind {
    /// Equal-superposition basis change (Hadamard-equivalent). Angle unused.
    Superposition,
    /// Pure basis flip (X gate). Angle unused.
    BitFlip,
    /// Parameterized phase rotation about the computational basis.
    PhaseShift,
    /// Parameterized rotation about the X axis.
    RotateX,
    /// Parameterized rotation about the Z axis.
    RotateZ,
}

/// Two-bit coupling kinds, where the source bit conditions the target's
/// evolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CouplingKind {
    /// Controlled bit flip (CX). Angle unused.
    ControlledFlip,
    /// Controlled phase rotation (CRZ).
    ControlledPhase,
}

/// One entry in the composed operation sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Single-bit parameterized rotation, addressed by group and offset
    /// within that group.
    LocalRotation {
        /// Register group the bit belongs to.
        group: RegisterGroup,
        /// Bit offset within the group.
        offset: usize,
        /// Rotation kind.
        kind: RotationKind,
        /// Rotation angle in radians; `0.0` for non-parameterized kinds.
        angle: f64,
    },
    /// Two-bit coupling addressed by absolute bit indices.
    PairCoupling {
        /// Coupling kind.
        kind: CouplingKind,
        /// Absolute index of the conditioning bit.
        source: usize,
        /// Absolute index of the conditioned bit.
        target: usize,
        /// Rotation angle in radians; `0.0` for `ControlledFlip`.
        angle: f64,
    },
    /// Three-bit conditional exchange (Fredkin-equivalent): if the control
    /// bit is set, the two targets swap values.
    ConditionalExchange {
        /// Absolute index of the control bit.
        control: usize,
        /// Absolute index of the first exchange target.
        target_a: usize,
        /// Absolute index of the second exchange target.
        target_b: usize,
    },
    /// No-op staging marker. Carries no computational effect but is
    /// preserved in order so intermediate states can be inspected
    /// reproducibly.
    Barrier {
        /// Human-readable stage label.
        label: String,
    },
}

impl Operation {
    /// True for staging markers.
    pub fn is_barrier(&self) -> bool {
        matches!(self, Operation::Barrier { .. })
    }
}

/// Ordered, serializable operation sequence plus the layout it targets.
///
/// This is the contract boundary handed to the external simulation backend;
/// the core never executes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationSequence {
    /// Register layout the sequence was composed against.
    pub layout: RegisterLayout,
    /// Operations in strict application order.
    pub operations: Vec<Operation>,
}

impl OperationSequence {
    /// Create an empty sequence for `layout`.
    pub fn new(layout: RegisterLayout) -> Self {
        Self { layout, operations: Vec::new() }
    }

    /// Number of operations, barriers included.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// True if no operations have been composed.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of staging markers in the sequence.
    pub fn barrier_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_barrier()).count()
    }

    /// Check that every referenced bit index lies inside the register array.
    ///
    /// Returns the first violation found, in application order.
    pub fn validate(&self) -> Result<(), ComposerError> {
        let total_bits = self.layout.total_bits();
        let check = |index: usize| {
            if index >= total_bits {
                Err(ComposerError::OperationIndexOutOfRange { index, total_bits })
            } else {
                Ok(())
            }
        };

        for op in &self.operations {
            match op {
                Operation::LocalRotation { group, offset, .. } => {
                    let absolute = self.layout.offset(*group) + offset;
                    if *offset >= self.layout.width(*group) {
                        return Err(ComposerError::OperationIndexOutOfRange {
                            index: absolute,
                            total_bits,
                        });
                    }
                    check(absolute)?;
                }
                Operation::PairCoupling { source, target, .. } => {
                    check(*source)?;
                    check(*target)?;
                }
                Operation::ConditionalExchange { control, target_a, target_b } => {
                    check(*control)?;
                    check(*target_a)?;
                    check(*target_b)?;
                }
                Operation::Barrier { .. } => {}
            }
        }
        Ok(())
    }
}
