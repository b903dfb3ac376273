//! buffer.rs
//! Output buffer growth.
//!
//! Growth only ever adds spare capacity behind the write cursor: `len` and the
//! bytes below it are untouched, so offsets stay valid across growth. Capacity at
//! least doubles on every reallocation, which keeps the total copy work for one
//! chunk linear in the produced output.

/// Free capacity behind the logical end of `buf`.
#[inline]
pub fn writable(buf: &Vec<u8>) -> usize {
    buf.capacity() - buf.len()
}

/// Ensure `buf` has at least `min_writable` bytes of spare capacity.
///
/// Returns `true` when a reallocation was requested.
pub fn grow(buf: &mut Vec<u8>, min_writable: usize) -> bool {
    if writable(buf) >= min_writable {
        return false;
    }
    let target = buf
        .capacity()
        .saturating_mul(2)
        .max(buf.len().saturating_add(min_writable));
    buf.reserve_exact(target - buf.len());
    true
}

/// Like [`grow`], but never asks for capacity beyond `budget` total bytes.
///
/// Returns `None` when `buf` already holds `budget` bytes and no room can be
/// granted, otherwise whether a reallocation was requested. Near the budget the
/// granted headroom may be smaller than `min_writable`.
pub fn grow_within(buf: &mut Vec<u8>, min_writable: usize, budget: usize) -> Option<bool> {
    if buf.len() >= budget {
        return None;
    }
    let wanted = min_writable.min(budget - buf.len());
    if writable(buf) >= wanted {
        return Some(false);
    }
    let target = buf
        .capacity()
        .saturating_mul(2)
        .max(buf.len() + wanted)
        .min(budget);
    buf.reserve_exact(target - buf.len());
    Some(true)
}
