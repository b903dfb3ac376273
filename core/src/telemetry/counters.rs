//! telemetry/counters.rs
//! Counters collected by a processor across its lifetime.
//!
//! Summary: plain field arithmetic, owned by one processor, merged by callers
//! that run several processors side by side.

use std::ops::AddAssign;

use serde::Serialize;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessorCounters {
    /// `process` calls that reached the engine.
    pub chunks: u64,
    /// Native step calls.
    pub steps: u64,
    /// Steps that reported stream-complete.
    pub stream_ends: u64,
    /// Output buffer reallocations.
    pub grows: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// Calls that ended with an error.
    pub failures: u64,
}

impl ProcessorCounters {
    /// Record one engine step.
    pub fn add_step(&mut self, consumed: usize, produced: usize) {
        self.steps += 1;
        self.bytes_in += consumed as u64;
        self.bytes_out += produced as u64;
    }

    /// Output bytes per input byte; 0.0 before any input.
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64
        }
    }

    pub fn merge(&mut self, other: &ProcessorCounters) {
        self.chunks      += other.chunks;
        self.steps       += other.steps;
        self.stream_ends += other.stream_ends;
        self.grows       += other.grows;
        self.bytes_in    += other.bytes_in;
        self.bytes_out   += other.bytes_out;
        self.failures    += other.failures;
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl AddAssign for ProcessorCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
