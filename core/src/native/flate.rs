//! native/flate.rs
//! zlib stream engine backed by flate2.
//!
//! flate2 already exposes deflate/inflate as boundary calls over borrowed
//! slices, so the window's writable region is handed to `compress` /
//! `decompress` as-is and no raw pointers leave this module. Progress is read
//! back from the stream's running totals.

use flate2::{
    Compress, Compression, Decompress, DecompressError, FlushCompress, FlushDecompress, Status,
};
use tracing::debug;

use crate::config::Level;
use crate::constants::status_codes;
use crate::native::{Direction, NativeEngine, Window};

enum Stream {
    Deflate(Compress),
    Inflate(Decompress),
}

/// A single native deflate or inflate stream, reused across chunks via `reset`.
pub struct FlateEngine {
    stream: Stream,
    zlib_header: bool,
}

impl FlateEngine {
    pub fn compressor(level: Level, zlib_header: bool) -> Self {
        debug!(level = level.as_u32(), zlib_header, "allocating deflate stream");
        Self {
            stream: Stream::Deflate(Compress::new(Compression::new(level.as_u32()), zlib_header)),
            zlib_header,
        }
    }

    pub fn decompressor(zlib_header: bool) -> Self {
        debug!(zlib_header, "allocating inflate stream");
        Self {
            stream: Stream::Inflate(Decompress::new(zlib_header)),
            zlib_header,
        }
    }
}

fn status_code(status: Status) -> i32 {
    match status {
        Status::Ok        => status_codes::Z_OK,
        Status::StreamEnd => status_codes::Z_STREAM_END,
        Status::BufError  => status_codes::Z_BUF_ERROR,
    }
}

fn inflate_error_code(err: &DecompressError) -> i32 {
    if err.needs_dictionary().is_some() {
        status_codes::Z_NEED_DICT
    } else {
        status_codes::Z_DATA_ERROR
    }
}

impl NativeEngine for FlateEngine {
    fn direction(&self) -> Direction {
        match self.stream {
            Stream::Deflate(_) => Direction::Compress,
            Stream::Inflate(_) => Direction::Decompress,
        }
    }

    fn step(&mut self, window: &mut Window<'_>) -> i32 {
        let input = window.input();
        let (consumed, code) = match &mut self.stream {
            Stream::Deflate(c) => {
                let (in0, out0) = (c.total_in(), c.total_out());
                let res = window.fill(|out| {
                    let res = c.compress(input, out, FlushCompress::Finish);
                    ((c.total_out() - out0) as usize, res)
                });
                let code = match res {
                    Ok(status) => status_code(status),
                    Err(_) => status_codes::Z_STREAM_ERROR,
                };
                ((c.total_in() - in0) as usize, code)
            }
            Stream::Inflate(d) => {
                let (in0, out0) = (d.total_in(), d.total_out());
                let res = window.fill(|out| {
                    let res = d.decompress(input, out, FlushDecompress::None);
                    ((d.total_out() - out0) as usize, res)
                });
                let code = match res {
                    Ok(status) => status_code(status),
                    Err(e) => inflate_error_code(&e),
                };
                ((d.total_in() - in0) as usize, code)
            }
        };
        window.advance_input(consumed);
        code
    }

    fn reset(&mut self) -> i32 {
        match &mut self.stream {
            Stream::Deflate(c) => c.reset(),
            Stream::Inflate(d) => d.reset(self.zlib_header),
        }
        status_codes::Z_OK
    }
}

impl Drop for FlateEngine {
    fn drop(&mut self) {
        debug!(direction = %self.direction(), "freeing native stream");
    }
}
