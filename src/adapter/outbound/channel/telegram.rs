//! Telegram channel.
//!
//! Sends each message as a plain-text `sendMessage` call through a
//! `teloxide` bot. Requires the `telegram` feature.

use std::fmt;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};
use crate::port::Channel;

use super::mask_secret;

/// Credentials for the Telegram channel.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat: a numeric chat ID or an `@channelname`.
    pub chat_id: String,
}

impl TelegramConfig {
    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing; values are validated when the channel is built.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok()?;
        Some(Self { bot_token, chat_id })
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_secret(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Telegram channel that posts to one chat.
pub struct TelegramChannel {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramChannel {
    /// Validate the credentials and create the bot client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the token is not of the form
    /// `<bot id>:<secret>` or the chat is neither an integer nor an
    /// `@channelname`.
    pub fn new(config: TelegramConfig) -> Result<Self> {
        validate_token(&config.bot_token)?;
        let recipient = parse_recipient(&config.chat_id)?;
        Ok(Self {
            bot: Bot::new(config.bot_token),
            recipient,
        })
    }

    /// Point the bot at a different Bot API server.
    #[must_use]
    pub fn with_api_url(mut self, url: Url) -> Self {
        self.bot = self.bot.set_api_url(url);
        self
    }

    #[must_use]
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<()> {
        let message = self.bot.send_message(self.recipient.clone(), text).await?;
        debug!(message_id = message.id.0, "Telegram message delivered");
        Ok(())
    }
}

fn validate_token(token: &str) -> Result<()> {
    let valid = token.split_once(':').is_some_and(|(id, secret)| {
        !id.is_empty()
            && id.chars().all(|c| c.is_ascii_digit())
            && !secret.is_empty()
            && secret
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    });

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: "bot_token",
            reason: "expected <bot id>:<secret>".into(),
        }
        .into())
    }
}

fn parse_recipient(chat_id: &str) -> Result<Recipient> {
    let chat_id = chat_id.trim();
    if let Ok(id) = chat_id.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    match chat_id.strip_prefix('@') {
        Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => {
            Ok(Recipient::ChannelUsername(chat_id.to_string()))
        }
        _ => Err(ConfigError::InvalidValue {
            field: "chat_id",
            reason: format!("expected an integer chat ID or @channelname, got '{chat_id}'"),
        }
        .into()),
    }
}
