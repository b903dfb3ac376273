//! compression/stream.rs
//! Streaming helper that respects chunk_size discipline.

use std::io::{ErrorKind, Read};

use crate::compression::types::{CompressionError, Compressor};
use crate::constants::MAX_CHUNK_SIZE;

/// Compress data read from `r` in `chunk_size` blocks, yielding one compressed
/// stream per block.
///
/// - Reads fill the whole block unless the reader hits EOF, so block boundaries
///   do not depend on how the reader splits its data.
/// - Every block is a complete stream, so nothing is pending at EOF.
/// - Stops after the first error.
pub fn compress_stream<R, C>(
    mut r: R,
    chunk_size: usize,
    mut compressor: C,
) -> Result<impl Iterator<Item = Result<Vec<u8>, CompressionError>>, CompressionError>
where
    R: Read,
    C: Compressor,
{
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(CompressionError::InvalidChunkSize { have: chunk_size, max: MAX_CHUNK_SIZE });
    }
    let mut buf = vec![0u8; chunk_size];
    let mut done = false;

    Ok(std::iter::from_fn(move || {
        if done {
            return None;
        }

        let n = match fill(&mut r, &mut buf) {
            Ok(n) => n,
            Err(e) => {
                done = true;
                return Some(Err(e.into()));
            }
        };

        if n == 0 {
            done = true;
            return None;
        }

        let mut out = Vec::new();
        match compressor.compress_chunk(&buf[..n], &mut out) {
            Ok(()) => Some(Ok(out)),
            Err(e) => {
                done = true;
                Some(Err(e))
            }
        }
    }))
}

fn fill<R: Read>(r: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
