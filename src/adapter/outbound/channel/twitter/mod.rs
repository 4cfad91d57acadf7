//! X (Twitter) channel.
//!
//! Posts each message as a status update through the X API v2
//! `POST /2/tweets` endpoint, signed with the account's OAuth 1.0a user
//! credentials. Requires the `twitter` feature.

mod oauth;

use std::fmt;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::error::{ChannelError, ConfigError, Result};
use crate::port::Channel;

use super::mask_secret;
use oauth::{authorization_header, Credentials, Nonce};

/// Production API host.
const API_BASE: &str = "https://api.twitter.com";

/// Status-update endpoint, relative to the API host.
const TWEETS_PATH: &str = "/2/tweets";

/// OAuth 1.0a credentials for the X channel.
#[derive(Clone)]
pub struct TwitterConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl TwitterConfig {
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `TWITTER_CONSUMER_KEY`, `TWITTER_CONSUMER_SECRET`,
    /// `TWITTER_ACCESS_TOKEN` and `TWITTER_ACCESS_TOKEN_SECRET`. Returns
    /// `None` if any is missing.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Some(Self {
            consumer_key: std::env::var("TWITTER_CONSUMER_KEY").ok()?,
            consumer_secret: std::env::var("TWITTER_CONSUMER_SECRET").ok()?,
            access_token: std::env::var("TWITTER_ACCESS_TOKEN").ok()?,
            access_token_secret: std::env::var("TWITTER_ACCESS_TOKEN_SECRET").ok()?,
        })
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
            if value.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not contain whitespace".into(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn credentials(&self) -> Credentials<'_> {
        Credentials {
            consumer_key: &self.consumer_key,
            consumer_secret: &self.consumer_secret,
            token: &self.access_token,
            token_secret: &self.access_token_secret,
        }
    }
}

impl fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("consumer_key", &mask_secret(&self.consumer_key))
            .field("consumer_secret", &mask_secret(&self.consumer_secret))
            .field("access_token", &mask_secret(&self.access_token))
            .field("access_token_secret", &mask_secret(&self.access_token_secret))
            .finish()
    }
}

#[derive(Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Deserialize)]
struct TweetData {
    id: String,
}

/// X channel that posts status updates for one account.
#[derive(Debug)]
pub struct TwitterChannel {
    /// HTTP client for API requests.
    client: Client,
    config: TwitterConfig,
    /// Absolute URL of the tweets endpoint.
    endpoint: Url,
}

impl TwitterChannel {
    /// Validate the credentials and create the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any credential is empty or contains
    /// whitespace.
    pub fn new(config: TwitterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: Client::new(),
            config,
            endpoint: endpoint(API_BASE)?,
        })
    }

    /// Send requests to a different API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base` is not a valid URL.
    pub fn with_api_base(mut self, base: &str) -> Result<Self> {
        self.endpoint = endpoint(base)?;
        Ok(self)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn endpoint(base: &str) -> Result<Url> {
    Url::parse(base)
        .and_then(|url| url.join(TWEETS_PATH))
        .map_err(|e| {
            ConfigError::InvalidValue {
                field: "api_base",
                reason: e.to_string(),
            }
            .into()
        })
}

#[async_trait]
impl Channel for TwitterChannel {
    fn name(&self) -> &'static str {
        "twitter"
    }

    async fn send(&self, text: &str) -> Result<()> {
        let nonce = Uuid::new_v4().simple().to_string();
        let authorization = authorization_header(
            &self.config.credentials(),
            &Nonce {
                nonce: &nonce,
                timestamp: Utc::now().timestamp(),
            },
            "POST",
            self.endpoint.as_str(),
            &[],
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("authorization", authorization)
            .json(&TweetRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, "Failed to read rejection body");
                    format!("<unreadable body: {e}>")
                }
            };
            return Err(ChannelError::Rejected {
                channel: "twitter",
                status: status.as_u16(),
                body,
            }
            .into());
        }

        // Already posted; an undecodable body must not fail the send.
        match response.json::<TweetResponse>().await {
            Ok(tweet) => debug!(tweet_id = %tweet.data.id, "Tweet posted"),
            Err(e) => debug!(error = %e, "Tweet posted, response body not decoded"),
        }
        Ok(())
    }
}
