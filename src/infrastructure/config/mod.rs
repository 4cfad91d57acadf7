//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod telegram;
pub mod twitter;

pub use settings::Config;

/// Serializes tests that read or modify process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
