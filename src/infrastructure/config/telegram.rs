//! Telegram channel configuration.

use serde::Deserialize;

/// Telegram section of the config file.
///
/// Credentials are read from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`,
/// never from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TelegramAppConfig {
    /// Send training updates to Telegram.
    #[serde(default)]
    pub enabled: bool,
}
