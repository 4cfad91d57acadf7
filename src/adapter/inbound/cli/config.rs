//! Shared config loading for CLI handlers.

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Load the file named by `--config`, or the defaults when none is given.
pub fn load(arg: &ConfigPathArg) -> Result<Config> {
    match &arg.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}
