//! compression/types.rs
//! Codec traits and errors for the chunk layer.

use thiserror::Error;

use crate::processor::{ProcessFailure, ProcessorError};

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error(transparent)]
    Processor(#[from] ProcessorError),

    #[error(transparent)]
    Process(#[from] ProcessFailure),

    #[error("{} bytes of trailing input after end of stream", .total - .consumed)]
    TrailingInput { consumed: usize, total: usize },

    #[error("chunk size {have} outside 1..={max}")]
    InvalidChunkSize { have: usize, max: usize },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompressionError {
    /// Underlying processor error, if any.
    pub fn processor_error(&self) -> Option<&ProcessorError> {
        match self {
            CompressionError::Processor(e) => Some(e),
            CompressionError::Process(f) => Some(&f.error),
            _ => None,
        }
    }
}

// Require Send so codecs can move across worker threads.
pub trait Compressor: Send {
    /// Compress a single chunk into `out` as one complete zlib stream.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Decompress a single complete stream into `out`.
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
