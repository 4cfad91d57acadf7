//! Command-line interface definitions.
//!
//! Defines the CLI structure for the epochcast binary using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Post training-run updates to Telegram and X
#[derive(Parser, Debug)]
#[command(name = "epochcast")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the epochcast CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a message through every configured channel
    Send(SendArgs),

    /// Print the message a notifier would send for the given metrics
    Format(FormatArgs),

    /// Validate configuration and channel credentials without sending
    Check(ConfigPathArg),
}

/// Optional configuration file path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the TOML config file; defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `epochcast send`.
#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Text to send
    pub text: String,
}

/// Arguments for `epochcast format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Epoch number for the first line
    #[arg(short, long)]
    pub epoch: Option<u64>,

    /// Metrics as a JSON object, e.g. '{"loss": 0.5, "lr": 0.001}'
    pub metrics: String,
}
