//! Synchronous front-end for training loops that do not run on tokio.

use tokio::runtime::{Builder, Runtime};

use crate::domain::Metrics;
use crate::error::Result;
use crate::port::{Channel, TrainingCallback};

use super::notifier::Notifier;

/// Wraps a [`Notifier`] and blocks the calling thread until each send
/// completes.
///
/// Owns a single-threaded tokio runtime for the channel's network calls.
/// Must not be driven from inside another tokio runtime.
pub struct BlockingNotifier<C> {
    inner: Notifier<C>,
    runtime: Runtime,
}

impl<C: Channel> BlockingNotifier<C> {
    /// Build the runtime and take ownership of `notifier`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the runtime cannot be created.
    pub fn new(notifier: Notifier<C>) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: notifier,
            runtime,
        })
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier<C> {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> Notifier<C> {
        self.inner
    }
}

impl<C: Channel> TrainingCallback for BlockingNotifier<C> {
    fn on_train_begin(&mut self) -> Result<()> {
        self.runtime.block_on(self.inner.on_train_begin())
    }

    fn on_epoch_end(&mut self, epoch: u64, metrics: &Metrics) -> Result<()> {
        self.runtime.block_on(self.inner.on_epoch_end(epoch, metrics))
    }

    fn on_train_end(&mut self, metrics: &Metrics) -> Result<()> {
        self.runtime.block_on(self.inner.on_train_end(metrics))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::application::notifier::{NotifierConfig, Phase};
    use crate::domain::Frequency;

    #[derive(Clone, Default)]
    struct Recorder {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Channel for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        async fn send(&self, text: &str) -> Result<()> {
            // Yield once so the runtime actually drives the future.
            tokio::task::yield_now().await;
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn drives_hooks_synchronously() {
        let recorder = Recorder::default();
        let config = NotifierConfig::new(Frequency::every(2).unwrap()).with_init_message("go");
        let mut callback = BlockingNotifier::new(Notifier::new(recorder.clone(), config)).unwrap();

        callback.on_train_begin().unwrap();
        for epoch in 0..4 {
            callback
                .on_epoch_end(epoch, &Metrics::from([("loss", 1.0 / (epoch + 1) as f64)]))
                .unwrap();
        }
        callback.on_train_end(&Metrics::new()).unwrap();

        assert_eq!(
            *recorder.sent.lock().unwrap(),
            vec![
                "go".to_string(),
                "epoch: 0\nloss: 1.0000\n".to_string(),
                "epoch: 2\nloss: 0.3333\n".to_string(),
                "epoch: 3\nloss: 0.2500\n".to_string(),
            ]
        );
        assert_eq!(callback.notifier().phase(), Phase::Done);
    }
}
