//! Application services (use cases).
//!
//! These services drive the domain logic from training-loop events and
//! hand the results to outbound channels.

pub mod blocking;
pub mod notifier;
