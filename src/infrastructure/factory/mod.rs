//! Factory functions that construct configured components.
//!
//! - [`notifier`] - Channel set and notifier construction

pub mod notifier;
