//! Handler for the `format` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::FormatArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{format_message, Metrics};
use crate::error::Result;

/// Print the message for the given metrics without sending it.
pub fn execute(args: &FormatArgs) -> Result<()> {
    let metrics: Metrics = serde_json::from_str(&args.metrics)?;
    let message = format_message(args.epoch, &metrics);

    if output::is_json() {
        output::json_output(json!({
            "command": "format",
            "message": message,
        }));
    } else {
        print!("{message}");
    }
    Ok(())
}
