//! constants.rs
//! Native status codes, compression levels and buffer growth defaults.

/// Raw status codes reported by the native zlib primitive.
pub mod status_codes {
    pub const Z_OK: i32            = 0;
    pub const Z_STREAM_END: i32    = 1;
    pub const Z_NEED_DICT: i32     = 2;
    pub const Z_ERRNO: i32         = -1;
    pub const Z_STREAM_ERROR: i32  = -2;
    pub const Z_DATA_ERROR: i32    = -3;
    pub const Z_MEM_ERROR: i32     = -4;
    pub const Z_BUF_ERROR: i32     = -5;
    pub const Z_VERSION_ERROR: i32 = -6;
}

/// zlib effort levels.
pub mod levels {
    pub const NO_COMPRESSION: u32 = 0;
    pub const BEST_SPEED: u32     = 1;
    pub const DEFAULT: u32        = 6;
    pub const BEST_COMPRESSION: u32 = 9;

    /// zlib's sentinel for "use the library default".
    pub const ZLIB_DEFAULT_SENTINEL: i32 = -1;
}

/// Headroom guaranteed in the output buffer before every engine step.
pub const DEFAULT_MIN_WRITABLE: usize = 4 * 1024;
/// Largest accepted per-step headroom (16 MiB).
pub const MAX_MIN_WRITABLE: usize = 16 * 1024 * 1024;

/// Suggested block size for `compress_stream`.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;
