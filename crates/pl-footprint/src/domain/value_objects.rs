//! # Domain Value Objects
//!
//! Immutable value types for footprint evaluation.

use super::errors::FootprintError;
use serde::{Deserialize, Serialize};

/// Default concentration threshold: a single outcome claiming more than 15%
/// of all samples counts as concentrated.
pub const DEFAULT_CONCENTRATION_THRESHOLD: f64 = 0.15;

/// Footprint classification of a sampled distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// A single outcome dominates beyond the threshold.
    Concentrated,
    /// Outcomes spread across many bitstrings.
    Fragmented,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Concentrated => write!(f, "CONCENTRATED"),
            Classification::Fragmented => write!(f, "FRAGMENTED"),
        }
    }
}

/// Validated concentration threshold, domain `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationThreshold(f64);

impl ConcentrationThreshold {
    /// Validate and wrap a threshold ratio.
    pub fn new(value: f64) -> Result<Self, FootprintError> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(FootprintError::InvalidThreshold { value });
        }
        Ok(Self(value))
    }

    /// The threshold ratio.
    pub fn ratio(&self) -> f64 {
        self.0
    }
}

impl Default for ConcentrationThreshold {
    fn default() -> Self {
        Self(DEFAULT_CONCENTRATION_THRESHOLD)
    }
}

/// Result of one footprint evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FootprintReport {
    /// Dominant count divided by total samples.
    pub ratio: f64,
    /// Threshold decision over `ratio`.
    pub classification: Classification,
    /// Occurrence count of the dominant outcome.
    pub dominant_count: u64,
    /// Total samples across all outcomes.
    pub total: u64,
}
