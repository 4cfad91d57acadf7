//! Training lifecycle callback port.

use crate::domain::Metrics;
use crate::error::Result;

/// Hooks a synchronous training loop invokes as training progresses.
///
/// Hooks are called in order on the training loop's own thread: one
/// `on_train_begin`, one `on_epoch_end` per completed epoch, and one
/// `on_train_end`. An error returned from any hook is the loop's to handle;
/// aborting training is a valid response.
///
/// Every hook defaults to a no-op so observers only implement what they
/// need.
pub trait TrainingCallback {
    /// Called once before the first epoch.
    fn on_train_begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called after each epoch with that epoch's metrics.
    fn on_epoch_end(&mut self, _epoch: u64, _metrics: &Metrics) -> Result<()> {
        Ok(())
    }

    /// Called once after the last epoch with the final metrics, which may
    /// be empty.
    fn on_train_end(&mut self, _metrics: &Metrics) -> Result<()> {
        Ok(())
    }
}
