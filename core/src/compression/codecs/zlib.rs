//! compression/codecs/zlib.rs
//! zlib chunk codecs on top of a reusable processor.
//!
//! Design notes:
//! - One processor per codec, allocated once; every chunk is a complete stream.
//! - Output goes through a scratch buffer whose capacity survives between chunks.
//! - A failed chunk resets the processor so the codec stays usable.

use crate::compression::types::{CompressionError, Compressor, Decompressor};
use crate::config::{Level, ProcessorConfig};
use crate::processor::{Processor, ProcessorError};

pub struct ZlibCompressor {
    processor: Processor,
    scratch: Vec<u8>,
}

impl ZlibCompressor {
    pub fn new(config: ProcessorConfig) -> Result<Self, CompressionError> {
        Ok(Self {
            processor: Processor::compressor(config)?,
            scratch: Vec::new(),
        })
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }
}

impl Compressor for ZlibCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        run_chunk(&mut self.processor, input, &mut self.scratch)?;
        out.extend_from_slice(&self.scratch);
        Ok(())
    }
}

pub struct ZlibDecompressor {
    processor: Processor,
    scratch: Vec<u8>,
}

impl ZlibDecompressor {
    pub fn new(config: ProcessorConfig) -> Result<Self, CompressionError> {
        Ok(Self {
            processor: Processor::decompressor(config)?,
            scratch: Vec::new(),
        })
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }
}

impl Decompressor for ZlibDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let consumed = run_chunk(&mut self.processor, input, &mut self.scratch)?;
        if consumed < input.len() {
            return Err(CompressionError::TrailingInput { consumed, total: input.len() });
        }
        out.extend_from_slice(&self.scratch);
        Ok(())
    }
}

fn run_chunk(processor: &mut Processor, input: &[u8], scratch: &mut Vec<u8>) -> Result<usize, CompressionError> {
    match processor.process_chunk(input, scratch) {
        Ok(consumed) => Ok(consumed),
        Err(failure) => {
            if failure.error != ProcessorError::Closed {
                processor.reset()?;
            }
            Err(failure.into())
        }
    }
}

/// Compress `data` into one zlib stream.
pub fn compress(data: &[u8], level: Level) -> Result<Vec<u8>, CompressionError> {
    let mut compressor = ZlibCompressor::new(ProcessorConfig::with_level(level))?;
    let mut out = Vec::new();
    compressor.compress_chunk(data, &mut out)?;
    Ok(out)
}

/// Decompress exactly one zlib stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut decompressor = ZlibDecompressor::new(ProcessorConfig::default())?;
    let mut out = Vec::new();
    decompressor.decompress_chunk(data, &mut out)?;
    Ok(out)
}
