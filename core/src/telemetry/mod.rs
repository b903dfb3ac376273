//! telemetry/mod.rs
//! Processor counters.

pub mod counters;

pub use counters::*;
