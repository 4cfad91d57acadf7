//! Channel adapters.
//!
//! Implements the `port::Channel` trait for external messaging services.

#[cfg(feature = "telegram")]
pub mod telegram;

#[cfg(feature = "twitter")]
pub mod twitter;

/// Shorten a secret for logs and diagnostics, keeping only its edges.
pub(crate) fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".into()
    }
}
