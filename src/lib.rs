//! Epochcast - training progress notifications for Telegram and X.
//!
//! Attach a notifier to a model's training loop and it reports the epoch's
//! metrics every few epochs, plus a final summary when training ends.
//!
//! # Architecture
//!
//! - **`domain`** - Metric snapshots, reporting cadence, message rendering
//! - **`port`** - [`TrainingCallback`](port::TrainingCallback) (driven by the
//!   training loop) and [`Channel`](port::Channel) (message delivery)
//! - **`application`** - [`Notifier`](application::notifier::Notifier) and
//!   its synchronous wrapper
//! - **`adapter`** - Telegram and X channels, CLI
//! - **`infrastructure`** - Configuration files and wiring
//!
//! # Features
//!
//! - `telegram` - Telegram channel via `teloxide` (default)
//! - `twitter` - X channel via the v2 API with OAuth 1.0a (default)
//!
//! # Example
//!
//! ```no_run
//! use epochcast::adapter::outbound::channel::telegram::{TelegramChannel, TelegramConfig};
//! use epochcast::application::blocking::BlockingNotifier;
//! use epochcast::application::notifier::{Notifier, NotifierConfig};
//! use epochcast::domain::{Frequency, Metrics};
//! use epochcast::port::TrainingCallback;
//!
//! # fn main() -> epochcast::error::Result<()> {
//! let channel = TelegramChannel::new(TelegramConfig::new("123456:ABC-token", "-100123"))?;
//! let config = NotifierConfig::new(Frequency::every(5)?).with_init_message("resnet50, lr=1e-3");
//! let mut callback = BlockingNotifier::new(Notifier::new(channel, config))?;
//!
//! callback.on_train_begin()?;
//! for epoch in 0..20 {
//!     let metrics = Metrics::new().with("loss", 1.0 / (epoch + 1) as f64).with("lr", 1e-3);
//!     callback.on_epoch_end(epoch, &metrics)?;
//! }
//! callback.on_train_end(&Metrics::new())?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
