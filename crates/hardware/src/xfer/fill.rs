//! Cache-allocating block fill.
//!
//! Fills 32-byte blocks with a byte value replicated across all four lanes
//! of a word. The walk runs backward from one-past-the-end using
//! pre-decrement offsets, matching the addressing mode that is free on the
//! target; each block's first store is the allocate-store (`movca.l`) for
//! the block's last word, which lands the line in cache without a memory
//! read, followed by the remaining 7 words in descending order.

use crate::common::PhysAddr;
use crate::common::constants::{CACHE_LINE_BYTES, WORD_BYTES, WORDS_PER_LINE};
use crate::hal::MemoryPort;

/// Replicates a byte into all four lanes of a 32-bit word.
#[inline]
const fn replicate(value: u8) -> u32 {
    let mut w = value as u32;
    w |= w << 8;
    w |= w << 16;
    w
}

/// Fills `len` bytes at `dst` with `value` replicated across each word.
///
/// Walks backward: the offset starts one past the end of the region and is
/// pre-decremented before every store, so the allocate-store for each block
/// targets the block's last word and the rest of the block follows in
/// descending order.
///
/// # Preconditions (caller contract, unchecked)
///
/// * `dst` is word-aligned; line alignment makes the allocate-store cover
///   exactly the block being written.
/// * `len` is a multiple of 32. `len == 0` is a no-op.
///
/// Violations are undefined behavior, not reported errors.
pub fn cache_fill<M: MemoryPort>(port: &mut M, dst: PhysAddr, value: u8, len: usize) {
    let word = replicate(value);
    // Byte offset one past the end; every store pre-decrements.
    let mut off = len as u32;

    for _ in 0..len / CACHE_LINE_BYTES {
        off -= WORD_BYTES;
        port.allocate_line_store(dst.add(off), word);
        for _ in 1..WORDS_PER_LINE {
            off -= WORD_BYTES;
            port.write_u32(dst.add(off), word);
        }
    }
}

/// Fills `len` bytes at `dst` with `value`, for any alignment and length.
///
/// Scalar-fills bytes up to word alignment and words up to line alignment,
/// runs [`cache_fill`] over the whole 32-byte blocks, then finishes the
/// remaining words and bytes with a plain scalar loop. The allocate-store
/// is only ever used on the line-aligned middle: `movca` dirties a whole
/// line without reading it, so issuing it against a partial line would
/// destroy the bytes of that line outside the fill. The sub-block head and
/// tail get no allocate optimization; they are too small to benefit.
///
/// No preconditions beyond valid memory. `len == 0` is a no-op.
pub fn cache_fill_any<M: MemoryPort>(port: &mut M, dst: PhysAddr, value: u8, len: usize) {
    let word = replicate(value);
    let mut a = dst.val();
    let end = a.wrapping_add(len as u32);

    // Head: bytes up to word alignment, then words up to line alignment.
    while a < end && a % WORD_BYTES != 0 {
        port.write_u8(PhysAddr::new(a), value);
        a += 1;
    }
    while end - a >= WORD_BYTES && a as usize % CACHE_LINE_BYTES != 0 {
        port.write_u32(PhysAddr::new(a), word);
        a += WORD_BYTES;
    }

    // Blocked middle over whole, line-aligned blocks.
    let blocks = ((end - a) as usize) / CACHE_LINE_BYTES;
    if blocks > 0 {
        cache_fill(port, PhysAddr::new(a), value, blocks * CACHE_LINE_BYTES);
        a += (blocks * CACHE_LINE_BYTES) as u32;
    }

    // Tail: remaining whole words, then bytes.
    while end - a >= WORD_BYTES {
        port.write_u32(PhysAddr::new(a), word);
        a += WORD_BYTES;
    }
    while a < end {
        port.write_u8(PhysAddr::new(a), value);
        a += 1;
    }
}
