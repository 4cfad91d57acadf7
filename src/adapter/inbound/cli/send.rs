//! Handler for the `send` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::SendArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::notifier::build_channels;
use crate::port::Channel;

/// Send the text through every configured channel.
pub async fn execute(args: &SendArgs, config: &Config) -> Result<()> {
    let channels = build_channels(config)?;

    channels.send(&args.text).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "send",
            "channels": channels.names(),
            "status": "sent",
        }));
        return Ok(());
    }

    output::section("Send");
    output::field("Channels", channels.names().join(", "));
    output::success("Message sent");
    Ok(())
}
