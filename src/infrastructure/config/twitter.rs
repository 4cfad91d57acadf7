//! X (Twitter) channel configuration.

use serde::Deserialize;

/// Twitter section of the config file.
///
/// Credentials are read from the `TWITTER_*` environment variables, never
/// from the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TwitterAppConfig {
    /// Post training updates to X.
    #[serde(default)]
    pub enabled: bool,
    /// API host; override for testing against a local server.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    "https://api.twitter.com".into()
}

impl Default for TwitterAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base: default_api_base(),
        }
    }
}
