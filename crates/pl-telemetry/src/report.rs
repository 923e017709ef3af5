//! # Footprint Reporting Sink
//!
//! Presents footprint verdicts as structured log events. This is the only
//! home for the human-facing narrative around a run's outcome; the
//! evaluator itself stays a pure function.
//!
//! Downstream consumers of these verdicts (an off-chain oracle feeding a
//! proof system, a ledger contract reacting to the classification) are
//! external systems: they read the report, they are never implemented here.

use pl_footprint::{Classification, FootprintReport};

/// Emit a structured log event for one footprint verdict.
///
/// Concentration is the noteworthy condition (a single reality dominating
/// the distribution), so it logs at `warn`; fragmentation logs at `info`.
pub fn report_footprint(report: &FootprintReport) {
    match report.classification {
        Classification::Concentrated => {
            tracing::warn!(
                classification = %report.classification,
                ratio = report.ratio,
                dominant_count = report.dominant_count,
                total = report.total,
                "flux detected: a single outcome dominates the distribution"
            );
        }
        Classification::Fragmented => {
            tracing::info!(
                classification = %report.classification,
                ratio = report.ratio,
                dominant_count = report.dominant_count,
                total = report.total,
                "distribution fragmented: no dominant outcome"
            );
        }
    }
}
