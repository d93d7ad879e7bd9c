//! Tracing subscriber initialisation.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! human-readable or a JSON formatting layer. `RUST_LOG` always wins over the
//! configured level.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ReestrResult;
use serde::{Deserialize, Serialize};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Base level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Whether to write to the console at all.
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_service_name() -> String {
    "reestr".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_console_output() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            format: LogFormat::default(),
            console_output: default_console_output(),
        }
    }
}

impl TelemetryConfig {
    /// Filter directives used when `RUST_LOG` is absent.
    #[must_use]
    pub fn default_directives(&self) -> String {
        format!("{},reestr=debug,tower_http=debug", self.log_level)
    }
}

/// Initialize tracing with the given configuration.
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> ReestrResult<()> {
    if !config.console_output {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let installed = match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    installed.map_err(|e| {
        crate::ReestrError::Internal(format!("Failed to install tracing subscriber: {}", e))
    })?;

    tracing::info!(
        service_name = %config.service_name,
        format = ?config.format,
        "Telemetry initialized"
    );

    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> ReestrResult<()> {
    Ok(())
}
