//! compression/codecs/mod.rs
//! Chunk codecs.

pub mod zlib;

pub use zlib::*;
