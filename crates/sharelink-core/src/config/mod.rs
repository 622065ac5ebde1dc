//! Client configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod server;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::server::ServerConfig;

use crate::error::AppError;

/// Root client configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Remote server endpoint settings.
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `SHARELINK_`, using `__` to
    /// separate nested sections (e.g. `SHARELINK_LOGGING__LEVEL`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHARELINK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> ClientConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config")
    }

    #[test]
    fn test_minimal_config_applies_defaults() {
        let config = from_toml(
            r#"
            [server]
            base_url = "https://cloud.example.com"
            "#,
        );

        assert_eq!(config.server.base_url, "https://cloud.example.com");
        assert_eq!(
            config.server.shares_route,
            "ocs/v2.php/apps/files_sharing/api/v1/shares"
        );
        assert_eq!(config.server.request_timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        // set_var is unsafe on edition 2024; no other test touches these keys.
        unsafe {
            std::env::set_var("SHARELINK_SERVER__BASE_URL", "https://env.example.com");
            std::env::set_var("SHARELINK_LOGGING__LEVEL", "trace");
        }

        let config = ClientConfig::load("nonexistent").expect("load config");

        unsafe {
            std::env::remove_var("SHARELINK_SERVER__BASE_URL");
            std::env::remove_var("SHARELINK_LOGGING__LEVEL");
        }

        assert_eq!(config.server.base_url, "https://env.example.com");
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.server.connect_timeout_seconds, 10);
    }

    #[test]
    fn test_env_wins_over_file_values() {
        let mut env = config::Map::new();
        env.insert(
            "SHARELINK_LOGGING__LEVEL".to_string(),
            "debug".to_string(),
        );

        let config: ClientConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                base_url = "https://cloud.example.com"

                [logging]
                level = "warn"
                "#,
                config::FileFormat::Toml,
            ))
            .add_source(
                config::Environment::with_prefix("SHARELINK")
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(env)),
            )
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.base_url, "https://cloud.example.com");
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let config = from_toml(
            r#"
            [server]
            base_url = "https://cloud.example.com"
            request_timeout_seconds = 5

            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        assert_eq!(config.server.request_timeout_seconds, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }
}
