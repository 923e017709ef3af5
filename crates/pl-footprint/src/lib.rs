//! # PL-Footprint: Footprint Accountability Evaluator
//!
//! Classifies a sampled outcome distribution as concentrated or fragmented.
//!
//! **Architecture:** Hexagonal (DDD, pure domain + algorithms)
//!
//! ## Purpose
//!
//! Consume the outcome frequency table produced by the external sampler and
//! decide whether any single measured reality dominates: `ratio =
//! max(count) / sum(counts)`, concentrated when the ratio exceeds the
//! configured threshold. The evaluator is a pure function of its inputs;
//! any reporting of the verdict belongs downstream.
//!
//! ## Module Structure
//!
//! ```text
//! pl-footprint/
//! ├── domain/          # Classification, ConcentrationThreshold, FootprintReport, errors
//! └── algorithms/      # evaluate_footprint() reduction
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::evaluate_footprint;
pub use domain::{
    Classification, ConcentrationThreshold, FootprintError, FootprintReport,
    DEFAULT_CONCENTRATION_THRESHOLD,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
