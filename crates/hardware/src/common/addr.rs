//! Physical address type.
//!
//! This module defines a strong type for SH-4 physical addresses to keep raw
//! register values, byte offsets, and addresses from mixing silently. It
//! provides the following:
//! 1. **Type Safety:** A newtype over the 32-bit SH-4 physical address space.
//! 2. **Arithmetic:** Byte-offset addition used by the block walkers.
//! 3. **Alignment:** Queries and rounding for word and cache-line boundaries.

use crate::common::constants::{CACHE_LINE_BYTES, WORD_BYTES};

/// A physical address in the SH-4 address space.
///
/// The SH-4 external address space is 29 bits wide; aliases such as the
/// store-queue area (`0xE000_0000`) and the P2 window live in the upper
/// bits, so the full 32-bit value is carried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u32);

impl PhysAddr {
    /// Creates a new physical address from a raw 32-bit value.
    #[inline(always)]
    #[must_use]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    #[must_use]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns this address advanced by `bytes`.
    ///
    /// Wrapping arithmetic: the store-queue alias sits at the top of the
    /// address space and offset math must not panic in release or debug.
    #[inline(always)]
    #[must_use]
    pub const fn add(self, bytes: u32) -> Self {
        Self(self.0.wrapping_add(bytes))
    }

    /// Returns `true` if the address is aligned to a 32-bit word.
    #[inline(always)]
    #[must_use]
    pub const fn is_word_aligned(self) -> bool {
        self.0 % WORD_BYTES == 0
    }

    /// Returns `true` if the address is aligned to a 32-byte cache line.
    #[inline(always)]
    #[must_use]
    pub const fn is_line_aligned(self) -> bool {
        self.0 % CACHE_LINE_BYTES as u32 == 0
    }

    /// Returns the address rounded down to the start of its cache line.
    #[inline(always)]
    #[must_use]
    pub const fn line_base(self) -> Self {
        Self(self.0 & !(CACHE_LINE_BYTES as u32 - 1))
    }
}

impl core::fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
