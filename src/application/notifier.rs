//! Training notifier: lifecycle hooks, cadence and message dispatch.
//!
//! The [`Notifier`] holds the latest epoch snapshot and decides when a
//! message is due. Formatting is delegated to a [`Formatter`] and delivery
//! to a [`Channel`]; the notifier itself performs no I/O.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::domain::{format_message, Formatter, Frequency, Metrics};
use crate::error::Result;
use crate::port::Channel;

/// Notifier settings supplied by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotifierConfig {
    /// Epoch-end cadence (default: every epoch).
    #[serde(default)]
    pub frequency: Frequency,
    /// Sent verbatim when training begins, e.g. the hyperparameters.
    #[serde(default)]
    pub init_message: Option<String>,
}

impl NotifierConfig {
    /// Settings with the given cadence and no initial message.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            init_message: None,
        }
    }

    /// Set the message sent when training begins.
    #[must_use]
    pub fn with_init_message(mut self, message: impl Into<String>) -> Self {
        self.init_message = Some(message.into());
        self
    }
}

/// Where the notifier is in the training lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed; training has not started.
    Idle,
    /// Receiving epoch-end events.
    Training,
    /// Final message sent.
    Done,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Training => "training",
            Self::Done => "done",
        }
    }
}

/// Sends training progress to a channel.
///
/// Drive it with one [`on_train_begin`](Self::on_train_begin), one
/// [`on_epoch_end`](Self::on_epoch_end) per epoch and one
/// [`on_train_end`](Self::on_train_end). A notifier covers a single training
/// run; its epoch state is never reset.
///
/// Send failures are returned as-is so the training loop can decide whether
/// to abort.
pub struct Notifier<C> {
    channel: C,
    frequency: Frequency,
    init_message: Option<String>,
    current_epoch: Option<u64>,
    current_metrics: Metrics,
    phase: Phase,
    formatter: Box<Formatter>,
}

impl<C: Channel> Notifier<C> {
    /// Create a notifier that delivers through `channel`.
    #[must_use]
    pub fn new(channel: C, config: NotifierConfig) -> Self {
        Self {
            channel,
            frequency: config.frequency,
            init_message: config.init_message,
            current_epoch: None,
            current_metrics: Metrics::new(),
            phase: Phase::Idle,
            formatter: Box::new(format_message),
        }
    }

    /// Replace the default message formatter.
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(Option<u64>, &Metrics) -> String + Send + Sync + 'static,
    {
        self.formatter = Box::new(formatter);
        self
    }

    /// Send the initial message, if one is configured.
    pub async fn on_train_begin(&mut self) -> Result<()> {
        self.enter(Phase::Training);
        match self.init_message.as_deref() {
            Some(message) => self.deliver(message).await,
            None => Ok(()),
        }
    }

    /// Record the epoch's metrics and send a report when one is due.
    pub async fn on_epoch_end(&mut self, epoch: u64, metrics: &Metrics) -> Result<()> {
        self.enter(Phase::Training);
        self.current_epoch = Some(epoch);
        self.current_metrics = metrics.clone();

        if !self.frequency.is_due(epoch) {
            debug!(epoch, frequency = %self.frequency, "No report due");
            return Ok(());
        }

        let message = self.message();
        self.deliver(&message).await
    }

    /// Send the final report, regardless of cadence.
    ///
    /// A non-empty `metrics` replaces the stored snapshot; an empty one
    /// reports the last epoch's metrics.
    pub async fn on_train_end(&mut self, metrics: &Metrics) -> Result<()> {
        if !metrics.is_empty() {
            self.current_metrics = metrics.clone();
        }
        let message = self.message();
        let result = self.deliver(&message).await;
        self.enter(Phase::Done);
        result
    }

    /// The report for the current epoch snapshot.
    #[must_use]
    pub fn message(&self) -> String {
        (self.formatter)(self.current_epoch, &self.current_metrics)
    }

    async fn deliver(&self, text: &str) -> Result<()> {
        let channel = self.channel.name();
        match self.channel.send(text).await {
            Ok(()) => {
                info!(channel, epoch = ?self.current_epoch, chars = text.len(), "Message sent");
                Ok(())
            }
            Err(e) => {
                error!(channel, epoch = ?self.current_epoch, error = %e, "Failed to send message");
                Err(e)
            }
        }
    }

    fn enter(&mut self, next: Phase) {
        if self.phase == Phase::Done {
            warn!(phase = next.as_str(), "Notifier used after training ended");
        }
        self.phase = next;
    }
}

impl<C> Notifier<C> {
    #[must_use]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub fn init_message(&self) -> Option<&str> {
        self.init_message.as_deref()
    }

    /// Last epoch passed to `on_epoch_end`, if any.
    #[must_use]
    pub fn current_epoch(&self) -> Option<u64> {
        self.current_epoch
    }

    /// Metrics of the latest epoch only.
    #[must_use]
    pub fn current_metrics(&self) -> &Metrics {
        &self.current_metrics
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl<C: Channel> fmt::Debug for Notifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("channel", &self.channel.name())
            .field("frequency", &self.frequency)
            .field("init_message", &self.init_message)
            .field("current_epoch", &self.current_epoch)
            .field("current_metrics", &self.current_metrics)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
