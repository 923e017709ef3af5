//! # State Composition
//!
//! Builds the ordered operation sequence preparing the entangled
//! multi-register state. Seven staged layers, each closed by a labelled
//! barrier:
//!
//! 1. Phase superposition
//! 2. Phase -> Existence entanglement
//! 3. Existence -> Resource reciprocity
//! 4. Fractal value scaling on Resource
//! 5. Single asymmetric energy-transfer coupling
//! 6. Declaration of position for one nominated entity
//! 7. Conditional trade over the Resource pair
//!
//! The composer is pure: same layout and constants always yield a
//! byte-identical sequence. It never samples or simulates.

use crate::domain::{
    ComposerError, CouplingKind, Operation, OperationSequence, PhysicalConstants, RegisterGroup,
    RegisterLayout, RotationKind,
};
use std::f64::consts::PI;

/// Compose the full state-preparation sequence for `layout`.
///
/// Deterministic; returns either a fully valid sequence or an error, never
/// a partial one.
pub fn compose(
    layout: &RegisterLayout,
    constants: &PhysicalConstants,
) -> Result<OperationSequence, ComposerError> {
    let mut seq = OperationSequence::new(*layout);

    // Stage 1: unresolved multiplicity of realities.
    for offset in 0..layout.width(RegisterGroup::Phase) {
        local(&mut seq, RegisterGroup::Phase, offset, RotationKind::Superposition, 0.0);
    }
    barrier(&mut seq, "phase-superposition");

    // Stage 2: entangle realities with entity existence, index for index.
    couple_groups(&mut seq, layout, RegisterGroup::Phase, RegisterGroup::Existence);
    barrier(&mut seq, "existence-entanglement");

    // Stage 3: resource state depends on existence state (reciprocity).
    couple_groups(&mut seq, layout, RegisterGroup::Existence, RegisterGroup::Resource);
    barrier(&mut seq, "resource-reciprocity");

    // Stage 4: fractal/self-similar value scaling.
    let fractal_angle = constants.golden_ratio * PI;
    for offset in 0..layout.width(RegisterGroup::Resource) {
        local(&mut seq, RegisterGroup::Resource, offset, RotationKind::PhaseShift, fractal_angle);
    }
    barrier(&mut seq, "fractal-value-scaling");

    // Stage 5: a single strong energy-transfer link on the first
    // Existence/Resource pair. Intentionally asymmetric - not replicated
    // across the group width.
    seq.operations.push(Operation::PairCoupling {
        kind: CouplingKind::ControlledPhase,
        source: layout.bit(RegisterGroup::Existence, 0),
        target: layout.bit(RegisterGroup::Resource, 0),
        angle: constants.energy,
    });
    barrier(&mut seq, "energy-transfer");

    // Stage 6: declaration for the one nominated entity. Fixed non-zero
    // initial state on the second Value bit, entangled with existence, then
    // the two declaration rotations.
    local(&mut seq, RegisterGroup::Value, 1, RotationKind::BitFlip, 0.0);
    couple_groups(&mut seq, layout, RegisterGroup::Existence, RegisterGroup::Value);
    local(&mut seq, RegisterGroup::Value, 0, RotationKind::RotateX, PI / 5.0_f64.sqrt());
    local(&mut seq, RegisterGroup::Value, 1, RotationKind::RotateZ, constants.density);
    barrier(&mut seq, "declaration");

    // Stage 7: the declared-position bit gates the resource swap.
    seq.operations.push(Operation::ConditionalExchange {
        control: layout.bit(RegisterGroup::Value, 0),
        target_a: layout.bit(RegisterGroup::Resource, 0),
        target_b: layout.bit(RegisterGroup::Resource, 1),
    });
    barrier(&mut seq, "conditional-trade");

    // Defensive invariant check: unreachable with a validated layout, but a
    // composer bug must abort rather than emit a partially valid sequence.
    seq.validate()?;

    tracing::debug!(
        operations = seq.len(),
        barriers = seq.barrier_count(),
        total_bits = layout.total_bits(),
        "composition complete"
    );
    Ok(seq)
}

fn local(
    seq: &mut OperationSequence,
    group: RegisterGroup,
    offset: usize,
    kind: RotationKind,
    angle: f64,
) {
    seq.operations.push(Operation::LocalRotation { group, offset, kind, angle });
}

/// Controlled bit flips from `source` into `target`, index for index.
fn couple_groups(
    seq: &mut OperationSequence,
    layout: &RegisterLayout,
    source: RegisterGroup,
    target: RegisterGroup,
) {
    for offset in 0..layout.width(source) {
        seq.operations.push(Operation::PairCoupling {
            kind: CouplingKind::ControlledFlip,
            source: layout.bit(source, offset),
            target: layout.bit(target, offset),
            angle: 0.0,
        });
    }
}

fn barrier(seq: &mut OperationSequence, label: &str) {
    seq.operations.push(Operation::Barrier { label: label.to_string() });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_sequence() -> OperationSequence {
        compose(&RegisterLayout::reference(), &PhysicalConstants::default()).unwrap()
    }

    #[test]
    fn test_composition_is_deterministic() {
        let a = reference_sequence();
        let b = reference_sequence();
        assert_eq!(a, b);
        // Byte-for-byte on the serialized contract boundary too.
        assert_eq!(serde_json::to_vec(&a).unwrap(), serde_json::to_vec(&b).unwrap());
    }

    #[test]
    fn test_exactly_seven_barriers() {
        assert_eq!(reference_sequence().barrier_count(), 7);
        // Width-independent.
        let wide = compose(&RegisterLayout::new(4, 4, 4, 4).unwrap(), &PhysicalConstants::default())
            .unwrap();
        assert_eq!(wide.barrier_count(), 7);
    }

    #[test]
    fn test_barrier_labels_in_stage_order() {
        let seq = reference_sequence();
        let labels: Vec<&str> = seq
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::Barrier { label } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                "phase-superposition",
                "existence-entanglement",
                "resource-reciprocity",
                "fractal-value-scaling",
                "energy-transfer",
                "declaration",
                "conditional-trade",
            ]
        );
    }

    #[test]
    fn test_all_indices_in_range() {
        for widths in [(2, 2, 2, 2), (3, 3, 3, 3), (5, 5, 5, 5)] {
            let layout =
                RegisterLayout::new(widths.0, widths.1, widths.2, widths.3).unwrap();
            let seq = compose(&layout, &PhysicalConstants::default()).unwrap();
            assert!(seq.validate().is_ok());
        }
    }

    #[test]
    fn test_single_energy_transfer_coupling() {
        // The strong coupling is a singular highlight, never replicated
        // across the group width.
        let layout = RegisterLayout::new(4, 4, 4, 4).unwrap();
        let seq = compose(&layout, &PhysicalConstants::default()).unwrap();
        let strong: Vec<&Operation> = seq
            .operations
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    Operation::PairCoupling { kind: CouplingKind::ControlledPhase, .. }
                )
            })
            .collect();
        assert_eq!(strong.len(), 1);
        match strong[0] {
            Operation::PairCoupling { source, target, angle, .. } => {
                assert_eq!(*source, layout.bit(RegisterGroup::Existence, 0));
                assert_eq!(*target, layout.bit(RegisterGroup::Resource, 0));
                assert!((angle - PhysicalConstants::default().energy).abs() < 1e-12);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_stage_one_covers_every_phase_bit() {
        let layout = RegisterLayout::new(3, 3, 3, 3).unwrap();
        let seq = compose(&layout, &PhysicalConstants::default()).unwrap();
        let superpositions = seq
            .operations
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    Operation::LocalRotation { kind: RotationKind::Superposition, .. }
                )
            })
            .count();
        assert_eq!(superpositions, 3);
    }

    #[test]
    fn test_declaration_sets_second_value_bit() {
        let seq = reference_sequence();
        let flips: Vec<&Operation> = seq
            .operations
            .iter()
            .filter(|op| {
                matches!(op, Operation::LocalRotation { kind: RotationKind::BitFlip, .. })
            })
            .collect();
        assert_eq!(flips.len(), 1);
        assert!(matches!(
            flips[0],
            Operation::LocalRotation { group: RegisterGroup::Value, offset: 1, .. }
        ));
    }

    #[test]
    fn test_conditional_exchange_gated_by_first_value_bit() {
        let layout = RegisterLayout::reference();
        let seq = reference_sequence();
        let exchange = seq
            .operations
            .iter()
            .find(|op| matches!(op, Operation::ConditionalExchange { .. }))
            .unwrap();
        match exchange {
            Operation::ConditionalExchange { control, target_a, target_b } => {
                assert_eq!(*control, layout.bit(RegisterGroup::Value, 0));
                assert_eq!(*target_a, layout.bit(RegisterGroup::Resource, 0));
                assert_eq!(*target_b, layout.bit(RegisterGroup::Resource, 1));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_mismatched_widths_fail_before_composition() {
        assert!(RegisterLayout::new(2, 2, 3, 2).is_err());
    }
}
