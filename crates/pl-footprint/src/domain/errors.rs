//! # Domain Errors
//!
//! Error types for the Footprint Accountability Evaluator. All fatal to the
//! current run: they indicate malformed input, never a transient failure.

use thiserror::Error;

/// Footprint evaluation error types.
#[derive(Debug, Error, PartialEq)]
pub enum FootprintError {
    /// The frequency table has no entries, or its counts sum to zero. The
    /// concentration ratio is undefined either way.
    #[error("Empty distribution: no outcomes to evaluate")]
    EmptyDistribution,

    /// An entry carries a negative occurrence count.
    #[error("Negative count for outcome {bitstring:?}: {count}")]
    NegativeCount {
        /// The offending outcome.
        bitstring: String,
        /// Its reported count.
        count: i64,
    },

    /// Concentration threshold outside the valid domain `(0, 1]`.
    #[error("Invalid concentration threshold: {value} (must be in (0, 1])")]
    InvalidThreshold {
        /// The rejected value.
        value: f64,
    },
}
