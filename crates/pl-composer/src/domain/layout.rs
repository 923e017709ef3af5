//! # Register Layout
//!
//! An ordered partition of the state array into four named, contiguous bit
//! groups. Constructed once, validated up front, and passed by reference
//! into the composer and any downstream consumer - there is no ambient
//! global layout.

use super::errors::ComposerError;
use serde::{Deserialize, Serialize};

/// The four named register groups, in layout order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterGroup {
    /// Count of latent alternative realities.
    Phase,
    /// Entities' active/inactive status.
    Existence,
    /// Tradeable value/token quantity.
    Resource,
    /// Declared position/goal commitment for one entity.
    Value,
}

impl RegisterGroup {
    /// All groups in layout order.
    pub const ALL: [RegisterGroup; 4] = [
        RegisterGroup::Phase,
        RegisterGroup::Existence,
        RegisterGroup::Resource,
        RegisterGroup::Value,
    ];

    /// Lowercase group name for labels and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegisterGroup::Phase => "phase",
            RegisterGroup::Existence => "existence",
            RegisterGroup::Resource => "resource",
            RegisterGroup::Value => "value",
        }
    }
}

impl std::fmt::Display for RegisterGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable register layout value object.
///
/// Invariant: groups are disjoint, contiguous, and their union is the full
/// bit array. Every offset is derived from the widths of preceding groups,
/// so there are no overlaps and no gaps by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterLayout {
    phase: usize,
    existence: usize,
    resource: usize,
    value: usize,
}

/// Reference sizing: two bits per group, eight bits total.
pub const REFERENCE_GROUP_WIDTH: usize = 2;

impl RegisterLayout {
    /// Validate and build a layout from the four group widths.
    ///
    /// The index-for-index couplings require `phase == existence ==
    /// resource == value`, and the conditional-exchange stage needs at
    /// least two `Resource` bits.
    pub fn new(
        phase: usize,
        existence: usize,
        resource: usize,
        value: usize,
    ) -> Result<Self, ComposerError> {
        let invalid = |detail: String| ComposerError::InvalidRegisterLayout { detail };

        for (group, width) in RegisterGroup::ALL.iter().zip([phase, existence, resource, value]) {
            if width == 0 {
                return Err(invalid(format!("{group} width must be positive, got 0")));
            }
        }
        if phase != existence {
            return Err(invalid(format!("phase width {phase} != existence width {existence}")));
        }
        if existence != resource {
            return Err(invalid(format!(
                "existence width {existence} != resource width {resource}"
            )));
        }
        if resource != value {
            return Err(invalid(format!("resource width {resource} != value width {value}")));
        }
        if resource < 2 {
            return Err(invalid(format!(
                "resource width must be at least 2 for the conditional exchange, got {resource}"
            )));
        }

        Ok(Self { phase, existence, resource, value })
    }

    /// The reference 2/2/2/2 layout.
    pub fn reference() -> Self {
        Self {
            phase: REFERENCE_GROUP_WIDTH,
            existence: REFERENCE_GROUP_WIDTH,
            resource: REFERENCE_GROUP_WIDTH,
            value: REFERENCE_GROUP_WIDTH,
        }
    }

    /// Width of `group` in bits.
    pub fn width(&self, group: RegisterGroup) -> usize {
        match group {
            RegisterGroup::Phase => self.phase,
            RegisterGroup::Existence => self.existence,
            RegisterGroup::Resource => self.resource,
            RegisterGroup::Value => self.value,
        }
    }

    /// Start offset of `group`: the sum of all preceding widths.
    pub fn offset(&self, group: RegisterGroup) -> usize {
        match group {
            RegisterGroup::Phase => 0,
            RegisterGroup::Existence => self.phase,
            RegisterGroup::Resource => self.phase + self.existence,
            RegisterGroup::Value => self.phase + self.existence + self.resource,
        }
    }

    /// Absolute bit index of `bit_offset` within `group`.
    ///
    /// `bit_offset` must be below the group width; the composer only calls
    /// this with loop indices bounded by `width(group)`.
    pub fn bit(&self, group: RegisterGroup, bit_offset: usize) -> usize {
        debug_assert!(bit_offset < self.width(group));
        self.offset(group) + bit_offset
    }

    /// Total register size in bits.
    pub fn total_bits(&self) -> usize {
        self.phase + self.existence + self.resource + self.value
    }
}
