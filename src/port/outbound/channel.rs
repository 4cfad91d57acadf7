//! Channel port for outbound messages.
//!
//! A channel is anything that can deliver a line of text to a human: a chat
//! bot, a social feed, or the log. The training notifier formats messages
//! and hands them to exactly one channel.

use async_trait::async_trait;
use tracing::info;

use crate::error::{ChannelError, Result};

/// Destination for formatted training messages.
///
/// # Errors
///
/// [`send`](Self::send) returns the underlying client failure unchanged.
/// Channels never retry or buffer; a failed message is the caller's to
/// handle.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Short channel name for logs and errors.
    fn name(&self) -> &'static str;

    /// Deliver `text` to the channel.
    ///
    /// Channels that do not override this report
    /// [`ChannelError::Unimplemented`].
    async fn send(&self, text: &str) -> Result<()> {
        Err(ChannelError::Unimplemented {
            channel: self.name(),
        }
        .into())
    }
}

#[async_trait]
impl<C: Channel + ?Sized> Channel for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn send(&self, text: &str) -> Result<()> {
        (**self).send(text).await
    }
}

#[async_trait]
impl<C: Channel + ?Sized> Channel for std::sync::Arc<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn send(&self, text: &str) -> Result<()> {
        (**self).send(text).await
    }
}

/// Fan-out channel (composite pattern).
///
/// Sends to every registered channel in registration order and stops at the
/// first failure.
pub struct Broadcast {
    channels: Vec<Box<dyn Channel>>,
}

impl Broadcast {
    /// Create an empty broadcast.
    #[must_use]
    pub fn new() -> Self {
        Self { channels: vec![] }
    }

    /// Register a channel.
    pub fn register(&mut self, channel: Box<dyn Channel>) {
        self.channels.push(channel);
    }

    /// Names of the registered channels, in send order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    /// Number of registered channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Check if no channel is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl Default for Broadcast {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Channel for Broadcast {
    fn name(&self) -> &'static str {
        "broadcast"
    }

    async fn send(&self, text: &str) -> Result<()> {
        for channel in &self.channels {
            channel.send(text).await?;
        }
        Ok(())
    }
}

/// A channel that writes messages to the log via tracing.
pub struct LogChannel;

#[async_trait]
impl Channel for LogChannel {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, text: &str) -> Result<()> {
        info!(channel = "log", message = %text.trim_end(), "Training update");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;

    struct CountingChannel {
        count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Channel for CountingChannel {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn send(&self, _text: &str) -> Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingChannel;

    #[async_trait]
    impl Channel for FailingChannel {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn send(&self, _text: &str) -> Result<()> {
            Err(ChannelError::Rejected {
                channel: "failing",
                status: 503,
                body: "unavailable".into(),
            }
            .into())
        }
    }

    struct SilentChannel;

    #[async_trait]
    impl Channel for SilentChannel {
        fn name(&self) -> &'static str {
            "silent"
        }
    }

    #[tokio::test]
    async fn default_send_is_unimplemented() {
        let err = SilentChannel.send("hello").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Channel(ChannelError::Unimplemented { channel: "silent" })
        ));
    }

    #[tokio::test]
    async fn broadcast_sends_to_all() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut broadcast = Broadcast::new();
        broadcast.register(Box::new(CountingChannel {
            count: count.clone(),
        }));
        broadcast.register(Box::new(CountingChannel {
            count: count.clone(),
        }));

        broadcast.send("epoch: 0\n").await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn broadcast_stops_at_first_failure() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut broadcast = Broadcast::new();
        broadcast.register(Box::new(FailingChannel));
        broadcast.register(Box::new(CountingChannel {
            count: count.clone(),
        }));

        let err = broadcast.send("epoch: 0\n").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Channel(ChannelError::Rejected { status: 503, .. })
        ));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn broadcast_len_and_names() {
        let mut broadcast = Broadcast::default();
        assert!(broadcast.is_empty());

        broadcast.register(Box::new(LogChannel));
        assert_eq!(broadcast.len(), 1);
        assert_eq!(broadcast.names(), vec!["log"]);
    }

    #[tokio::test]
    async fn log_channel_accepts_everything() {
        LogChannel.send("epoch: 1\nloss: 0.1000\n").await.unwrap();
    }
}
