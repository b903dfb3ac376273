//! native/mod.rs
//! Boundary to the native zlib primitive.
//!
//! Design notes:
//! - An engine owns one compression or decompression stream for its whole life.
//! - A `Window` borrows the caller's input and output for exactly one `step` call.
//!   Nothing is retained across calls, so the engine never holds a dangling region.
//! - Engines report raw zlib status codes; interpretation belongs to the processor.
//! - Dropping the engine frees the native state.

pub mod flate;

pub use flate::*;

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::status_codes;

/// Stream direction, fixed when the engine is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Compress,
    Decompress,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Compress   => f.write_str("compress"),
            Direction::Decompress => f.write_str("decompress"),
        }
    }
}

/// Known zlib status codes, used for naming raw codes in diagnostics.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum ZlibCode {
    Ok           = status_codes::Z_OK,
    StreamEnd    = status_codes::Z_STREAM_END,
    NeedDict     = status_codes::Z_NEED_DICT,
    Errno        = status_codes::Z_ERRNO,
    StreamError  = status_codes::Z_STREAM_ERROR,
    DataError    = status_codes::Z_DATA_ERROR,
    MemError     = status_codes::Z_MEM_ERROR,
    BufError     = status_codes::Z_BUF_ERROR,
    VersionError = status_codes::Z_VERSION_ERROR,
}

impl ZlibCode {
    pub fn name(&self) -> &'static str {
        match self {
            ZlibCode::Ok           => "Z_OK",
            ZlibCode::StreamEnd    => "Z_STREAM_END",
            ZlibCode::NeedDict     => "Z_NEED_DICT",
            ZlibCode::Errno        => "Z_ERRNO",
            ZlibCode::StreamError  => "Z_STREAM_ERROR",
            ZlibCode::DataError    => "Z_DATA_ERROR",
            ZlibCode::MemError     => "Z_MEM_ERROR",
            ZlibCode::BufError     => "Z_BUF_ERROR",
            ZlibCode::VersionError => "Z_VERSION_ERROR",
        }
    }
}

/// Symbolic name for known codes, decimal for anything else.
pub fn code_name(raw: i32) -> String {
    match ZlibCode::try_from_primitive(raw) {
        Ok(code) => code.name().to_string(),
        Err(_) => format!("unknown({})", raw),
    }
}

/// Input and output regions installed into the engine for a single step.
///
/// The writable output region starts at `output.len()` and lies inside the
/// vector's spare capacity, optionally capped shorter. Engines write through
/// [`Window::fill`] and never grow the vector.
pub struct Window<'a> {
    input: &'a [u8],
    output: &'a mut Vec<u8>,
    end: usize,
}

impl<'a> Window<'a> {
    /// Window over all of `input` and the whole spare capacity of `output`.
    pub fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        let end = output.capacity();
        Self { input, output, end }
    }

    /// Like [`Window::new`], but exposes at most `max_out` writable bytes.
    pub fn bounded(input: &'a [u8], output: &'a mut Vec<u8>, max_out: usize) -> Self {
        let spare = output.capacity() - output.len();
        let end = output.len() + spare.min(max_out);
        Self { input, output, end }
    }

    /// Unconsumed input.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    pub fn avail_in(&self) -> usize {
        self.input.len()
    }

    pub fn avail_out(&self) -> usize {
        self.end.saturating_sub(self.output.len())
    }

    /// Mark `n` input bytes as consumed.
    pub fn advance_input(&mut self, n: usize) {
        let n = n.min(self.input.len());
        self.input = &self.input[n..];
    }

    /// Hand the writable region to `f` as a slice of exactly `avail_out` bytes.
    ///
    /// `f` returns how many leading bytes it wrote; only those are kept.
    pub fn fill<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut [u8]) -> (usize, R),
    {
        let start = self.output.len();
        let avail = self.avail_out();
        self.output.resize(start + avail, 0);
        let (written, result) = f(&mut self.output[start..]);
        self.output.truncate(start + written.min(avail));
        result
    }
}

/// One native compression or decompression stream.
///
/// Implementations are not expected to be shared: the processor that owns an
/// engine calls it strictly sequentially.
pub trait NativeEngine {
    /// Direction selected at allocation.
    fn direction(&self) -> Direction;

    /// Run one engine step over `window` and return the raw status code.
    fn step(&mut self, window: &mut Window<'_>) -> i32;

    /// Return the stream to its freshly-initialised state, keeping its allocation.
    fn reset(&mut self) -> i32;
}

impl<E: NativeEngine + ?Sized> NativeEngine for Box<E> {
    fn direction(&self) -> Direction {
        (**self).direction()
    }

    fn step(&mut self, window: &mut Window<'_>) -> i32 {
        (**self).step(window)
    }

    fn reset(&mut self) -> i32 {
        (**self).reset()
    }
}
