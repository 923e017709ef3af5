//! # Domain Errors
//!
//! Error types for the Register State Composer.
//!
//! Both configuration errors and invariant violations are fatal to the
//! current run: they indicate a malformed layout or an internal bug, never a
//! transient condition worth retrying.

use thiserror::Error;

/// Composer error types.
#[derive(Debug, Error)]
pub enum ComposerError {
    /// Register layout fails validation (zero width, or unequal widths
    /// where index-for-index couplings require equality).
    #[error("Invalid register layout: {detail}")]
    InvalidRegisterLayout {
        /// Human-readable description including the offending widths.
        detail: String,
    },

    /// A generated operation references a bit outside the register array.
    ///
    /// Unreachable when the layout validated; kept as a defensive invariant
    /// check so a composer bug aborts the run instead of emitting a
    /// partially valid sequence.
    #[error("Operation index out of range: bit {index} (register size {total_bits})")]
    OperationIndexOutOfRange {
        /// The out-of-range absolute bit index.
        index: usize,
        /// Total register size in bits.
        total_bits: usize,
    },

    /// The external sampling backend failed.
    #[error("Sampler backend failure: {0}")]
    SamplerFailure(String),
}
