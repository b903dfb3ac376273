//! zproc-core
//!
//! Chunked zlib compression and decompression over a reusable native stream.
//! The processor owns the stream, grows the output on demand and resets the
//! stream between chunks instead of reallocating it.

#![forbid(unsafe_code)]

// Shared and top level
pub mod buffer;
pub mod config;
pub mod constants;

// Native boundary and orchestration
pub mod native;
pub mod processor;
pub mod telemetry;

// Chunk codecs
pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress, compress_stream, decompress, CompressionError, Compressor, Decompressor,
        ZlibCompressor, ZlibDecompressor,
    };
    pub use crate::config::{Level, ProcessorConfig};
    pub use crate::native::{Direction, FlateEngine, NativeEngine, Window};
    pub use crate::processor::{
        classify, Phase, ProcessFailure, Processor, ProcessorError, Progress, StatusCode,
    };
    pub use crate::telemetry::ProcessorCounters;
}
