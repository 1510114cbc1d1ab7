//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Share of the daily profit target lost per stoppage day.
pub const DEFAULT_STOPPAGE_LOSS_FACTOR: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Derivation engine policy.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Derivation engine policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Fraction of the daily profit target lost per stoppage day.
    #[serde(default = "default_stoppage_loss_factor")]
    pub stoppage_loss_factor: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stoppage_loss_factor: default_stoppage_loss_factor(),
        }
    }
}

fn default_stoppage_loss_factor() -> Decimal {
    DEFAULT_STOPPAGE_LOSS_FACTOR
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `FEEBURN__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FEEBURN").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` for a stoppage loss factor outside 0..=1.
    pub fn validate(&self) -> AppResult<()> {
        let factor = self.engine.stoppage_loss_factor;
        if factor.is_sign_negative() || factor > Decimal::ONE {
            return Err(AppError::Configuration(format!(
                "engine.stoppage_loss_factor must be between 0 and 1, got {factor}"
            )));
        }
        Ok(())
    }
}
