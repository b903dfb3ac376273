//! compression/mod.rs
//! Chunk compression and decompression over reusable processors.
//!
//! Notes:
//! - Each chunk is compressed as its own zlib stream, so chunks decode independently.
//! - Codecs own one processor each; the native stream is allocated once per codec.

pub mod codecs;
pub mod stream;
pub mod types;

pub use codecs::*;
pub use stream::*;
pub use types::*;
