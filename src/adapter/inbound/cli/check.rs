//! Handler for the `check` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;
use crate::infrastructure::factory::notifier::build_channels;

/// Validate the configuration and construct every enabled channel.
pub fn execute(arg: &ConfigPathArg) -> Result<()> {
    let config = config::load(arg)?;
    let channels = build_channels(&config)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check",
            "frequency": config.notifier.frequency.to_string(),
            "init_message": config.notifier.init_message,
            "channels": channels.names(),
            "status": "ok",
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    match &arg.config {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "defaults"),
    }
    output::field("Frequency", config.notifier.frequency);
    output::field(
        "Init message",
        config.notifier.init_message.as_deref().unwrap_or("none"),
    );
    output::field("Channels", channels.names().join(", "));
    if channels.len() == 1 {
        output::warning("Only the log channel is enabled");
    }
    output::success("Configuration check complete");
    Ok(())
}
