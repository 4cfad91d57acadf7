//! Channel and notifier factory.
//!
//! Provides factory functions for constructing the outbound channel set and
//! a ready-to-attach notifier from configuration.

use tracing::info;

use crate::application::notifier::Notifier;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::{Broadcast, LogChannel};

#[cfg(feature = "telegram")]
use crate::adapter::outbound::channel::telegram::{TelegramChannel, TelegramConfig};
#[cfg(feature = "twitter")]
use crate::adapter::outbound::channel::twitter::{TwitterChannel, TwitterConfig};

/// Build the channel set from configuration.
///
/// Always includes the log channel. Each enabled service is constructed
/// from its environment credentials, so a bad token fails here rather than
/// at the first message.
///
/// # Errors
///
/// Returns a [`ConfigError`] if an enabled channel has missing or invalid
/// credentials, or was compiled out.
pub fn build_channels(config: &Config) -> Result<Broadcast> {
    let mut channels = Broadcast::new();
    channels.register(Box::new(LogChannel));

    if config.telegram.enabled {
        register_telegram(&mut channels)?;
    }
    if config.twitter.enabled {
        register_twitter(&mut channels, config)?;
    }

    info!(channels = ?channels.names(), "Channels configured");
    Ok(channels)
}

/// Build a notifier that broadcasts to every configured channel.
pub fn build_notifier(config: &Config) -> Result<Notifier<Broadcast>> {
    let channels = build_channels(config)?;
    Ok(Notifier::new(channels, config.notifier.clone()))
}

#[cfg(feature = "telegram")]
fn register_telegram(channels: &mut Broadcast) -> Result<()> {
    let tg_config = TelegramConfig::from_env().ok_or(ConfigError::MissingField {
        field: "TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID",
    })?;
    channels.register(Box::new(TelegramChannel::new(tg_config)?));
    Ok(())
}

#[cfg(not(feature = "telegram"))]
fn register_telegram(_channels: &mut Broadcast) -> Result<()> {
    Err(ConfigError::InvalidValue {
        field: "telegram.enabled",
        reason: "built without the `telegram` feature".into(),
    }
    .into())
}

#[cfg(feature = "twitter")]
fn register_twitter(channels: &mut Broadcast, config: &Config) -> Result<()> {
    let tw_config = TwitterConfig::from_env().ok_or(ConfigError::MissingField {
        field: "TWITTER_CONSUMER_KEY, TWITTER_CONSUMER_SECRET, TWITTER_ACCESS_TOKEN or TWITTER_ACCESS_TOKEN_SECRET",
    })?;
    let channel = TwitterChannel::new(tw_config)?.with_api_base(&config.twitter.api_base)?;
    channels.register(Box::new(channel));
    Ok(())
}

#[cfg(not(feature = "twitter"))]
fn register_twitter(_channels: &mut Broadcast, _config: &Config) -> Result<()> {
    Err(ConfigError::InvalidValue {
        field: "twitter.enabled",
        reason: "built without the `twitter` feature".into(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    #[cfg(any(feature = "telegram", feature = "twitter"))]
    use crate::infrastructure::config::ENV_LOCK;

    #[cfg(feature = "twitter")]
    const TWITTER_VARS: [&str; 4] = [
        "TWITTER_CONSUMER_KEY",
        "TWITTER_CONSUMER_SECRET",
        "TWITTER_ACCESS_TOKEN",
        "TWITTER_ACCESS_TOKEN_SECRET",
    ];

    #[test]
    fn log_channel_only_by_default() {
        let channels = build_channels(&Config::default()).unwrap();
        assert_eq!(channels.names(), vec!["log"]);
    }

    #[test]
    fn notifier_takes_configured_cadence() {
        let config = Config::from_toml_str("[notifier]\nfrequency = 4\n").unwrap();
        let notifier = build_notifier(&config).unwrap();
        assert_eq!(notifier.frequency(), config.notifier.frequency);
    }

    #[cfg(feature = "telegram")]
    #[test]
    fn enabled_telegram_requires_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");

        let config = Config::from_toml_str("[telegram]\nenabled = true\n").unwrap();

        assert!(matches!(
            build_channels(&config),
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[cfg(feature = "telegram")]
    #[test]
    fn enabled_telegram_rejects_bad_token() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("TELEGRAM_BOT_TOKEN", "not-a-token");
        std::env::set_var("TELEGRAM_CHAT_ID", "42");

        let config = Config::from_toml_str("[telegram]\nenabled = true\n").unwrap();
        let result = build_channels(&config);

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "bot_token",
                ..
            }))
        ));
    }

    #[cfg(feature = "twitter")]
    #[test]
    fn enabled_twitter_registers_after_log() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var in TWITTER_VARS {
            std::env::set_var(var, "value");
        }

        let config = Config::from_toml_str("[twitter]\nenabled = true\n").unwrap();
        let result = build_channels(&config);

        for var in TWITTER_VARS {
            std::env::remove_var(var);
        }

        assert_eq!(result.unwrap().names(), vec!["log", "twitter"]);
    }
}
