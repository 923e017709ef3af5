//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for Phaseloom logging output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to write log output to the console
    pub console_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "phaseloom".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            console_output: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PL_SERVICE_NAME`: Service name (default: phaseloom)
    /// - `PL_LOG_LEVEL`: Log level filter (default: info)
    /// - `PL_JSON_LOGS`: Emit JSON logs when set to `1` or `true`
    /// - `PL_CONSOLE_OUTPUT`: Disable console output when set to `0` or `false`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: env::var("PL_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: env::var("PL_LOG_LEVEL").unwrap_or(defaults.log_level),
            json_logs: env::var("PL_JSON_LOGS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.json_logs),
            console_output: env::var("PL_CONSOLE_OUTPUT")
                .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
                .unwrap_or(defaults.console_output),
        }
    }
}
