//! Inbound (driving) ports consumed by training loops.

pub mod callback;
