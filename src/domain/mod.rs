//! Channel-agnostic domain types: metric snapshots, reporting cadence and
//! message rendering.

mod frequency;
mod message;
mod metrics;

pub use frequency::Frequency;
pub use message::{format_message, Formatter, LEARNING_RATE_KEY};
pub use metrics::Metrics;
