//! # Physical Constants
//!
//! The constant set parameterizing the composed state: a golden-ratio
//! derived phase constant, a high-energy scaling constant, and a small
//! density constant. Bundled into one immutable value object so callers
//! pass a single reference instead of loose floats.

use serde::{Deserialize, Serialize};

/// The golden ratio, (1 + sqrt(5)) / 2.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Reference energy-transfer constant for the single strong coupling.
pub const REFERENCE_ENERGY: f64 = 3.14159 * 1000.0;

/// Reference low-density constant for the declaration rotation.
pub const REFERENCE_DENSITY: f64 = 0.0001 * std::f64::consts::PI;

/// Immutable physical parameter set for one composition run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Golden-ratio constant; the fractal value-scaling angle is this
    /// multiplied by pi.
    pub golden_ratio: f64,
    /// High-energy constant for the asymmetric energy-transfer coupling.
    pub energy: f64,
    /// Small density constant for the declaration Z rotation.
    pub density: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self { golden_ratio: GOLDEN_RATIO, energy: REFERENCE_ENERGY, density: REFERENCE_DENSITY }
    }
}
