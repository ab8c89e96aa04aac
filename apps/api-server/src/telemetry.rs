//! Telemetry initialization - tracing and log mirroring setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::observability::{LogMirrorHandle, LogMirrorLayer};

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name for tracing.
    pub service_name: String,
    /// Mirror WARN+ events into the logs collection.
    pub log_mirror_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            service_name: "raga-api".to_string(),
            log_mirror_enabled: true,
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            service_name: std::env::var("SERVICE_NAME").unwrap_or_else(|_| "raga-api".to_string()),
            log_mirror_enabled: std::env::var("LOG_MIRROR_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

/// Initialize telemetry. Returns the mirror handle to attach to the log
/// repository once the application state exists; events arriving before
/// that buffer in the channel.
pub fn init_telemetry(config: &TelemetryConfig) -> Option<LogMirrorHandle> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,raga_server=debug,raga_infra=debug"));

    let (mirror_layer, mirror_handle) = if config.log_mirror_enabled {
        let (layer, handle) = LogMirrorLayer::channel();
        (Some(layer), Some(handle))
    } else {
        (None, None)
    };

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .with(mirror_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .with(mirror_layer)
            .init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        log_mirror = config.log_mirror_enabled,
        "Telemetry initialized"
    );

    mirror_handle
}
