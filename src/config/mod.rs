//! Application configuration module
//!
//! Configuration is read from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `TRANSFER_BOOKING` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use transfer_booking::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod features;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads. Only the
/// assistant's API key is required, and only while the assistant is enabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference provider configuration (OpenAI/Anthropic)
    #[serde(default)]
    pub ai: AiConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `TRANSFER_BOOKING__*` variables:
    ///
    /// - `TRANSFER_BOOKING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TRANSFER_BOOKING__AI__PRIMARY_PROVIDER=anthropic` -> `ai.primary_provider`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRANSFER_BOOKING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Loads and validates in one step; what the server binary uses.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.features.wizard_enabled && !self.features.assistant_enabled {
            return Err(ValidationError::NoModeEnabled);
        }
        self.server.validate()?;
        self.ai.validate(self.features.assistant_enabled)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TRANSFER_BOOKING__AI__OPENAI_API_KEY",
        "TRANSFER_BOOKING__AI__PRIMARY_PROVIDER",
        "TRANSFER_BOOKING__AI__TEMPERATURE",
        "TRANSFER_BOOKING__SERVER__PORT",
        "TRANSFER_BOOKING__SERVER__ENVIRONMENT",
        "TRANSFER_BOOKING__FEATURES__ASSISTANT_ENABLED",
        "TRANSFER_BOOKING__FEATURES__WIZARD_ENABLED",
    ];

    fn set_minimal_env() {
        env::set_var("TRANSFER_BOOKING__AI__OPENAI_API_KEY", "sk-test-xxx");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        with_env(vars, AppConfig::load)
    }

    fn with_env(
        vars: &[(&str, &str)],
        loader: fn() -> Result<AppConfig, ConfigError>,
    ) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        set_minimal_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = loader();
        clear_env();
        result
    }

    #[test]
    fn test_load_from_environment() {
        let config = load_with(&[]).unwrap();
        assert!(config.ai.has_openai());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_is_production() {
        let config = load_with(&[("TRANSFER_BOOKING__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_values() {
        let config = load_with(&[
            ("TRANSFER_BOOKING__SERVER__PORT", "3000"),
            ("TRANSFER_BOOKING__AI__PRIMARY_PROVIDER", "anthropic"),
            ("TRANSFER_BOOKING__AI__TEMPERATURE", "0.5"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.primary_provider, AiProvider::Anthropic);
        assert!((config.ai.temperature - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_key_fails_validation_only_with_assistant() {
        let mut config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));

        config.features.assistant_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_both_modes_disabled_is_invalid() {
        let mut config = AppConfig::default();
        config.features.assistant_enabled = false;
        config.features.wizard_enabled = false;
        assert!(matches!(config.validate(), Err(ValidationError::NoModeEnabled)));
    }

    #[test]
    fn test_load_validated_reports_validation_failure() {
        let result = with_env(
            &[
                ("TRANSFER_BOOKING__FEATURES__ASSISTANT_ENABLED", "false"),
                ("TRANSFER_BOOKING__FEATURES__WIZARD_ENABLED", "false"),
            ],
            AppConfig::load_validated,
        );
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::NoModeEnabled))
        ));

        assert!(with_env(&[], AppConfig::load_validated).is_ok());
    }
}
