//! processor/error.rs
//! Error classification for native status codes.
//!
//! Every code outside `Z_OK` / `Z_STREAM_END` is a failure; the raw code is
//! always kept so callers can diagnose it.

use std::fmt;

use thiserror::Error;

use crate::native::code_name;

/// Call site a native code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Processing,
    Reset,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Processing => f.write_str("processing"),
            Phase::Reset      => f.write_str("reset"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("native processing failed: {}", code_name(*.code))]
    Processing { code: i32 },

    #[error("native reset failed: {}", code_name(*.code))]
    Reset { code: i32 },

    #[error("output budget of {limit} bytes exceeded")]
    OutputBudgetExceeded { limit: usize },

    #[error("processor is closed")]
    Closed,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProcessorError {
    /// Native call site, for the two native failure classes.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            ProcessorError::Processing { .. } => Some(Phase::Processing),
            ProcessorError::Reset { .. }      => Some(Phase::Reset),
            _ => None,
        }
    }

    /// Raw native code, for the two native failure classes.
    pub fn code(&self) -> Option<i32> {
        match self {
            ProcessorError::Processing { code } | ProcessorError::Reset { code } => Some(*code),
            _ => None,
        }
    }
}

/// Build the typed error for a failing native code.
pub fn classify(phase: Phase, code: i32) -> ProcessorError {
    match phase {
        Phase::Processing => ProcessorError::Processing { code },
        Phase::Reset      => ProcessorError::Reset { code },
    }
}

/// A `process` call that stopped early.
///
/// `consumed` counts the input bytes the engine accepted before the failure;
/// the output buffer still holds everything produced up to that point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error} (after consuming {consumed} input bytes)")]
pub struct ProcessFailure {
    pub consumed: usize,
    #[source]
    pub error: ProcessorError,
}

impl ProcessFailure {
    pub fn new(consumed: usize, error: ProcessorError) -> Self {
        Self { consumed, error }
    }
}
