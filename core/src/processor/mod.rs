//! processor/mod.rs
//! Chunk processor over a native zlib stream.
//!
//! Notes:
//! - One processor per stream direction, reused across many chunks.
//! - Errors carry the native phase and raw code; nothing is retried here.

pub mod driver;
pub mod error;
pub mod status;

pub use driver::*;
pub use error::*;
pub use status::*;
