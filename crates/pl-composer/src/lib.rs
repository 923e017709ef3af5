//! # PL-Composer: Register State Composer
//!
//! Deterministic preparation of a multi-register entangled state as an
//! ordered, serializable operation sequence.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Build the full state-preparation layer over four named bit groups:
//! - `Phase` - latent alternative realities
//! - `Existence` - entity active/inactive status
//! - `Resource` - tradeable value quantity
//! - `Value` - one entity's declared position
//!
//! The composer emits the sequence; execution belongs to an external
//! backend injected through the [`Sampler`] port. Composition is pure and
//! byte-for-byte reproducible.
//!
//! ## Module Structure
//!
//! ```text
//! pl-composer/
//! ├── domain/          # RegisterLayout, Operation, PhysicalConstants, errors
//! ├── algorithms/      # compose() staged sequence construction
//! └── ports/           # Sampler, MockSampler
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::compose;
pub use domain::{
    ComposerError, CouplingKind, Operation, OperationSequence, PhysicalConstants, RegisterGroup,
    RegisterLayout, RotationKind, GOLDEN_RATIO, REFERENCE_DENSITY, REFERENCE_ENERGY,
    REFERENCE_GROUP_WIDTH,
};
pub use ports::{MockSampler, Sampler};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
