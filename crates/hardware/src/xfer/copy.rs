//! Cache-allocating block copy.
//!
//! Copies 32-byte blocks using the allocate-store (`movca.l`) for the first
//! word of each destination line, so the CPU never performs a wasted
//! read-for-ownership on destination lines whose old contents are about to
//! be overwritten. Source latency is hidden by a software prefetch kept one
//! full line (8 words) ahead of the consuming loads — one prefetch per
//! line, never more.

use crate::common::PhysAddr;
use crate::common::constants::{CACHE_LINE_BYTES, PREFETCH_PITCH_WORDS, WORD_BYTES, WORDS_PER_LINE};
use crate::hal::MemoryPort;

/// Copies `len` bytes from `src` to `dst` in 32-byte blocks.
///
/// Per block: prefetch the source line one pitch ahead, load all 8 source
/// words into locals (no read-after-write hazard against the stores), issue
/// the allocate-store for the first destination word, then store the
/// remaining 7 words into the now-allocated line.
///
/// # Preconditions (caller contract, unchecked)
///
/// * `dst` and `src` are word-aligned; `dst` should be line-aligned for the
///   allocate-store to cover exactly the block being written.
/// * `len` is a multiple of 32. `len == 0` is a no-op.
/// * The regions do not overlap and are not concurrently accessed.
///
/// Violations are undefined behavior, not reported errors.
pub fn cache_copy<M: MemoryPort>(port: &mut M, dst: PhysAddr, src: PhysAddr, len: usize) {
    let pitch_bytes = PREFETCH_PITCH_WORDS * WORD_BYTES;
    let mut off: u32 = 0;

    for _ in 0..len / CACHE_LINE_BYTES {
        // One prefetch per line, issued before the loads of the current
        // block so the next line is in flight while this one is consumed.
        port.prefetch(src.add(off + pitch_bytes));

        let mut words = [0u32; WORDS_PER_LINE];
        for (i, w) in words.iter_mut().enumerate() {
            *w = port.read_u32(src.add(off + i as u32 * WORD_BYTES));
        }

        // The allocate-store must be the first touch of the destination
        // line; it lands the line in cache dirty without a memory read.
        port.allocate_line_store(dst.add(off), words[0]);
        for (i, w) in words.iter().enumerate().skip(1) {
            port.write_u32(dst.add(off + i as u32 * WORD_BYTES), *w);
        }

        off += CACHE_LINE_BYTES as u32;
    }
}
