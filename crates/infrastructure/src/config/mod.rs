//! Application configuration
//!
//! Read once at startup: an optional `config.toml` next to the binary,
//! overridden by `TIDEWEAR_`-prefixed environment variables. Every
//! section has working defaults so the demo runs with no config at
//! all. Injector knobs are normalized at use-time by the injector
//! itself; a bad value degrades instead of failing startup.

mod server;
mod stages;

use serde::{Deserialize, Serialize};

pub use server::ServerConfig;
pub use stages::StagesConfig;

use crate::telemetry::TelemetryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Tracing/OTel export settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Per-stage fault and latency tuning
    #[serde(default)]
    pub stages: StagesConfig,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a present config file cannot be parsed or a
    /// value cannot be deserialized into the expected shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TIDEWEAR_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("TIDEWEAR")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_quiet() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert!(!config.telemetry.enabled);
        assert_eq!(config.stages.printing.error_interval, 0);
    }

    #[test]
    fn config_deserializes_from_toml_shape() {
        let toml = r#"
            [server]
            port = 8080

            [stages.printing]
            error_percentage = 0.1
            error_interval = 5

            [stages.delivery.latency]
            mean_ms = 100
            jitter_ms = 25
        "#;
        let config: AppConfig = toml_shape(toml);

        assert_eq!(config.server.port, 8080);
        assert!((config.stages.printing.error_percentage - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.stages.printing.error_interval, 5);
        assert_eq!(config.stages.delivery.latency.mean_ms, 100);
        // Untouched sections keep their defaults
        assert_eq!(config.stages.packaging.error_interval, 0);
    }

    fn toml_shape(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn config_serializes_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server.host, config.server.host);
    }
}
