//! Outbound adapters (driven side).

pub mod channel;
