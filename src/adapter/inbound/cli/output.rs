//! CLI output formatting.
//!
//! Human-readable lines with colored status symbols, or one JSON object per
//! line in `--json` mode for scripting. Errors always go to stderr.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress everything except results and errors.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

fn settings() -> OutputConfig {
    OUTPUT.get().copied().unwrap_or_default()
}

/// Apply the global flags. Only the first call takes effect.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT.set(config);
}

#[must_use]
pub fn is_json() -> bool {
    settings().json
}

/// Print a command result in JSON mode.
pub fn json_output(payload: Value) {
    println!("{payload}");
}

/// Human-readable line unless quiet; JSON lines are left to `json_output`.
fn human(line: impl FnOnce()) {
    let config = settings();
    if !config.json && !config.quiet {
        line();
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    human(|| println!("  {:<12} {}", label.dimmed(), value));
}

/// Print a success line.
pub fn success(message: &str) {
    human(|| println!("  {} {}", "✓".green(), message));
}

/// Print a warning line.
pub fn warning(message: &str) {
    human(|| println!("  {} {}", "⚠".yellow(), message));
}

/// Print a section header.
pub fn section(title: &str) {
    human(|| {
        println!();
        println!("{}", title.bold());
    });
}

/// Print an error to stderr.
pub fn error(message: &str) {
    if settings().json {
        eprintln!("{}", json!({ "type": "error", "message": message }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}
