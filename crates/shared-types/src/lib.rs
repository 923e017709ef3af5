//! # Shared Types
//!
//! Data model shared between the Phaseloom composer and the footprint
//! evaluator.
//!
//! ## Components
//!
//! - `frequency` - Measurement outcome frequency tables
//!
//! The frequency table is the single hand-off point between the external
//! sampling backend and the accountability evaluator: produced once per
//! pipeline run, consumed once, never mutated afterward.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod frequency;

pub use frequency::{Bitstring, FrequencyTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
