//! # Outcome Frequency Tables
//!
//! Mapping from measured bitstrings to occurrence counts.
//!
//! Counts are carried as `i64`, not `u64`: a malformed upstream table (for
//! example a backend reporting a negative occurrence) must survive intact to
//! the evaluator so it can be rejected with the offending value, never
//! silently clamped here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A measured outcome: one ASCII `0`/`1` per register bit, most-significant
/// bit first.
pub type Bitstring = String;

/// Outcome frequency table: bitstring -> occurrence count.
///
/// Iteration order is deterministic (lexicographic over bitstrings), so two
/// tables with the same entries serialize identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: BTreeMap<Bitstring, i64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `outcome`, accumulating over repeats.
    pub fn record(&mut self, outcome: impl Into<Bitstring>, count: i64) {
        *self.counts.entry(outcome.into()).or_insert(0) += count;
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no outcomes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// The outcome with the highest count, if any.
    ///
    /// Ties resolve to the lexicographically smallest bitstring, keeping the
    /// result deterministic.
    pub fn dominant(&self) -> Option<(&str, i64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(outcome, count)| (outcome.as_str(), *count))
    }

    /// Iterate over `(bitstring, count)` entries in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(outcome, count)| (outcome.as_str(), *count))
    }
}

impl FromIterator<(Bitstring, i64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Bitstring, i64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (outcome, count) in iter {
            table.record(outcome, count);
        }
        table
    }
}
