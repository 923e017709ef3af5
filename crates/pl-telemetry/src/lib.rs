//! # Phaseloom Telemetry
//!
//! Logging side-channel for the composition/evaluation core.
//!
//! ## Components
//!
//! - `config` - Environment-driven logging configuration
//! - `report` - Footprint verdict reporting sink
//!
//! The core crates only emit `tracing` events; this crate owns subscriber
//! installation and the human-facing presentation of results, keeping both
//! entirely outside the pure functions.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod report;

pub use config::TelemetryConfig;
pub use report::report_footprint;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Telemetry initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Install the global tracing subscriber from `config`.
///
/// Call once at startup; a second call fails with
/// [`TelemetryError::SubscriberInit`].
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    // Without console output the events are still built and filtered, they
    // just go to a sink writer.
    let result = match (config.json_logs, config.console_output) {
        (true, true) => builder.json().try_init(),
        (true, false) => builder.json().with_writer(std::io::sink).try_init(),
        (false, true) => builder.try_init(),
        (false, false) => builder.with_writer(std::io::sink).try_init(),
    };
    result.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::debug!(
        service_name = %config.service_name,
        json_logs = config.json_logs,
        "logging initialized"
    );
    Ok(())
}
