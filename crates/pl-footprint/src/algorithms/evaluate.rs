//! # Footprint Evaluation
//!
//! Pure reduction over an outcome frequency table: the share of the single
//! most frequent outcome decides whether consequence is concentrated on a
//! few realities or fragmented across many.

use crate::domain::{Classification, ConcentrationThreshold, FootprintError, FootprintReport};
use shared_types::FrequencyTable;

/// Evaluate the footprint of a sampled distribution.
///
/// `ratio = max(count) / sum(counts)`; classified [`Concentrated`] when the
/// ratio strictly exceeds the threshold, [`Fragmented`] otherwise.
///
/// [`Concentrated`]: Classification::Concentrated
/// [`Fragmented`]: Classification::Fragmented
pub fn evaluate_footprint(
    table: &FrequencyTable,
    threshold: ConcentrationThreshold,
) -> Result<FootprintReport, FootprintError> {
    if table.is_empty() {
        return Err(FootprintError::EmptyDistribution);
    }
    for (bitstring, count) in table.iter() {
        if count < 0 {
            return Err(FootprintError::NegativeCount {
                bitstring: bitstring.to_string(),
                count,
            });
        }
    }

    let total = table.total();
    if total == 0 {
        return Err(FootprintError::EmptyDistribution);
    }

    // Non-empty and all counts validated non-negative above.
    let (dominant_outcome, dominant_count) = match table.dominant() {
        Some(entry) => entry,
        None => return Err(FootprintError::EmptyDistribution),
    };

    let ratio = dominant_count as f64 / total as f64;
    let classification = if ratio > threshold.ratio() {
        Classification::Concentrated
    } else {
        Classification::Fragmented
    };

    tracing::debug!(
        %classification,
        ratio,
        dominant_outcome,
        dominant_count,
        total,
        "footprint evaluated"
    );

    Ok(FootprintReport {
        ratio,
        classification,
        dominant_count: dominant_count as u64,
        total: total as u64,
    })
}
