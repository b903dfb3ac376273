//! processor/status.rs
//! Tri-state interpretation of a native step result.

use crate::constants::status_codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// `Z_OK`: the engine wants more iterations.
    Progress,
    /// `Z_STREAM_END`: logical end of the current stream.
    StreamComplete,
    /// Anything else, carrying the raw code.
    Failure(i32),
}

impl StatusCode {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            status_codes::Z_OK         => StatusCode::Progress,
            status_codes::Z_STREAM_END => StatusCode::StreamComplete,
            other                      => StatusCode::Failure(other),
        }
    }
}
