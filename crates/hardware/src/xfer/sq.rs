//! Store-queue burst copy.
//!
//! Routes a copy through the CPU's two write-combining store queues. The
//! destination is written through its alias in the `0xE000_0000` queue
//! area; the QACR registers bind both queue halves to the destination's
//! address-space slot; each 8-word burst is flushed by a prefetch on the
//! alias and the corresponding destination cache line is invalidated so
//! stale cached data cannot shadow what the hardware wrote. The two halves
//! are used alternately so the flush of one overlaps the fill of the other.

use crate::common::PhysAddr;
use crate::common::constants::{
    CACHE_LINE_BYTES, QACR0, QACR1, QACR_AREA_SHIFT, QACR_FIELD_MASK, SQ0_BASE, SQ1_BASE,
    SQ_AREA_BASE, SQ_AREA_OFFSET_MASK, SQ_BURST_BYTES, WORD_BYTES, WORDS_PER_LINE,
};
use crate::hal::{MemoryPort, RegisterPort};

/// QACR field binding a queue half to the destination's address area.
#[inline]
const fn qacr_bind(dest: u32) -> u32 {
    ((dest >> QACR_AREA_SHIFT) << 2) & QACR_FIELD_MASK
}

/// Copies `len` bytes from `src` to the physical address `dest` through the
/// store queues.
///
/// Both QACR registers are programmed identically for a sequential
/// transfer, so the two halves alternate over consecutive 32-byte lines of
/// the destination. After the final burst the queues are drained and the
/// QACR registers cleared; the window is never left armed across calls.
///
/// # Preconditions (caller contract, unchecked)
///
/// * `dest` is 64-byte aligned; `src` is word-aligned.
/// * `len` is a multiple of 64. `len == 0` programs and drains the window
///   without transferring.
/// * The caller owns the store-queue hardware exclusively for the duration:
///   no concurrent invocation on any core, no interrupting context that
///   touches the queues or the destination lines.
///
/// Violations are undefined behavior, not reported errors.
pub fn sq_copy<B: MemoryPort + RegisterPort>(bus: &mut B, dest: PhysAddr, src: PhysAddr, len: usize) {
    // Queue-area alias of the destination: fixed high bits plus the
    // position-within-window bits of the destination itself.
    let mut alias = PhysAddr::new(SQ_AREA_BASE | (dest.val() & SQ_AREA_OFFSET_MASK));

    // Arm both halves for the destination's 64 MiB area.
    let bind = qacr_bind(dest.val());
    bus.write_register(QACR0, bind);
    bus.write_register(QACR1, bind);

    let mut soff: u32 = 0;
    let mut line = dest;

    for _ in 0..len / SQ_BURST_BYTES {
        // Two queue halves per burst: filling the second while the first
        // flushes keeps both in flight.
        for _ in 0..2 {
            for i in 0..WORDS_PER_LINE as u32 {
                let w = bus.read_u32(src.add(soff));
                bus.write_u32(alias.add(i * WORD_BYTES), w);
                soff += WORD_BYTES;
            }
            // The prefetch on a queue alias is the flush trigger, not a
            // cache hint.
            bus.prefetch(alias);
            // Drop any stale cached copy of the line the hardware just
            // wrote behind the cache's back.
            bus.invalidate_line(line);
            alias = alias.add(CACHE_LINE_BYTES as u32);
            line = line.add(CACHE_LINE_BYTES as u32);
        }
    }

    // Drain: force any residual pending flush, scrub the first word of each
    // half, and return the window to idle with the bind registers cleared.
    bus.prefetch(PhysAddr::new(SQ0_BASE));
    bus.prefetch(PhysAddr::new(SQ1_BASE));
    bus.write_u32(PhysAddr::new(SQ0_BASE), 0);
    bus.write_u32(PhysAddr::new(SQ1_BASE), 0);
    bus.write_register(QACR0, 0);
    bus.write_register(QACR1, 0);
}
