//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   training loop ──► TrainingCallback ──► Notifier ──► Channel
//!                         (inbound)                     (outbound)
//!                                                 ┌────────┼────────┐
//!                                              Telegram    X       Log
//! ```
//!
//! - [`TrainingCallback`] - lifecycle hooks driven by a training loop
//! - [`Channel`] - message delivery (Telegram, X, logging, fan-out)

pub mod inbound;
pub mod outbound;

pub use inbound::callback::TrainingCallback;
pub use outbound::channel::{Broadcast, Channel, LogChannel};
