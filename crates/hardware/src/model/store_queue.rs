//! Store-queue pair model.
//!
//! Models the two 32-byte write-combining queues and their QACR address
//! binding. Word stores into the `0xE000_0000` alias area land in one of
//! the queues (address bit 5 selects the half); a prefetch on the area
//! flushes that half as a single 32-byte burst to the external address
//! reconstructed from the half's QACR register and the alias offset bits.
//!
//! The model tracks which queue words have been written since the last
//! flush so a drain store (a single zero word to the queue base) produces a
//! flush of only what was staged, matching how the idle-return protocol is
//! observed on hardware.

use crate::common::constants::{QACR_FIELD_MASK, SQ_AREA_OFFSET_MASK, SQ_SELECT_BIT, WORDS_PER_LINE};

/// One queue half: 8 staged words plus a written mask.
#[derive(Debug, Clone, Copy, Default)]
struct Half {
    words: [u32; WORDS_PER_LINE],
    written: u8,
}

/// The two store queues and their QACR bind registers.
#[derive(Debug, Default)]
pub struct StoreQueueUnit {
    halves: [Half; 2],
    qacr: [u32; 2],
}

impl StoreQueueUnit {
    /// Creates an idle queue pair with cleared QACR registers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the QACR register for half `n` (0 or 1).
    #[must_use]
    pub const fn qacr(&self, n: usize) -> u32 {
        self.qacr[n]
    }

    /// Programs the QACR register for half `n`; only the area field is held.
    pub const fn set_qacr(&mut self, n: usize, val: u32) {
        self.qacr[n] = val & QACR_FIELD_MASK;
    }

    /// Returns `true` if the window is disarmed: both QACR bind registers
    /// cleared. Staged-but-unflushed words are just data and do not count;
    /// only the bind state decides whether a later flush can land anywhere.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.qacr[0] == 0 && self.qacr[1] == 0
    }

    #[inline]
    const fn half_of(alias: u32) -> usize {
        ((alias >> SQ_SELECT_BIT) & 1) as usize
    }

    /// Stages a word written through the alias area.
    pub const fn write(&mut self, alias: u32, val: u32) {
        let h = Self::half_of(alias);
        let idx = ((alias >> 2) & 0x7) as usize;
        self.halves[h].words[idx] = val;
        self.halves[h].written |= 1 << idx;
    }

    /// Flushes the half addressed by `alias`.
    ///
    /// Returns the reconstructed external burst address and the 8 staged
    /// words, or `None` if nothing was staged since the last flush. External
    /// address bits [28:26] come from the half's QACR area field, bits
    /// [25:5] from the alias.
    pub const fn flush(&mut self, alias: u32) -> Option<(u32, [u32; WORDS_PER_LINE])> {
        let h = Self::half_of(alias);
        if self.halves[h].written == 0 {
            return None;
        }
        let ext = ((self.qacr[h] & QACR_FIELD_MASK) << 24) | (alias & SQ_AREA_OFFSET_MASK);
        let words = self.halves[h].words;
        self.halves[h].written = 0;
        Some((ext, words))
    }
}
