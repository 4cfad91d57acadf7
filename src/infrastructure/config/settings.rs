//! Configuration file loading and validation.

use std::path::Path;

use serde::Deserialize;

use crate::application::notifier::NotifierConfig;
use crate::error::{ConfigError, Result};

use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use super::twitter::TwitterAppConfig;

/// Main application configuration.
///
/// ```toml
/// [notifier]
/// frequency = 5            # or "final"
/// init_message = "resnet50, lr=1e-3"
///
/// [telegram]
/// enabled = true
///
/// [twitter]
/// enabled = false
///
/// [logging]
/// level = "info"
/// format = "pretty"
/// ```
///
/// Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub telegram: TelegramAppConfig,
    #[serde(default)]
    pub twitter: TwitterAppConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, including a
    /// frequency of zero, and [`ConfigError::InvalidValue`] for values
    /// that parse but are not usable.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        if self.twitter.enabled && self.twitter.api_base.is_empty() {
            return Err(ConfigError::MissingField {
                field: "twitter.api_base",
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
