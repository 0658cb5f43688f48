//! Hardware register map and transfer protocol constants.
//!
//! This module defines the fixed SH-4 and PVR addresses the primitives
//! program, plus the block geometry of the transfer protocols. It includes:
//! 1. **Block Geometry:** Cache-line and store-queue burst sizes.
//! 2. **Store Queue Map:** The SQ alias area, the two queue bases, and the
//!    QACR bind-control registers.
//! 3. **PVR Map:** The graphics DMA mode register and write-only window.
//!
//! These are protocol constants of the external hardware interface, not
//! tunables; changing them only makes sense for a different chip revision.

/// Size of a 32-bit word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Operand-cache line size in bytes; the block size of the cache-allocating
/// copy and fill routines.
pub const CACHE_LINE_BYTES: usize = 32;

/// Number of 32-bit words per cache line.
pub const WORDS_PER_LINE: usize = 8;

/// Store-queue burst size in bytes (both queue halves); the block size of
/// the store-queue copy routine.
pub const SQ_BURST_BYTES: usize = 64;

/// Software prefetch pitch in words: the source prefetch pointer runs one
/// full cache line (8 words) ahead of the consuming loads.
pub const PREFETCH_PITCH_WORDS: u32 = 8;

/// Base of the store-queue alias area. Word stores to this area land in one
/// of the two hardware queues instead of memory.
pub const SQ_AREA_BASE: u32 = 0xE000_0000;

/// Mask selecting the position-within-window bits a destination address
/// contributes to its store-queue alias (bits [25:5]).
pub const SQ_AREA_OFFSET_MASK: u32 = 0x03FF_FFE0;

/// Base address of store-queue 0 (first 32-byte half).
pub const SQ0_BASE: u32 = 0xE000_0000;

/// Base address of store-queue 1 (second 32-byte half).
pub const SQ1_BASE: u32 = 0xE000_0020;

/// Queue-area address bit that selects between SQ0 and SQ1.
pub const SQ_SELECT_BIT: u32 = 5;

/// Store-queue address control register 0: binds SQ0 flushes to external
/// address bits [28:26].
pub const QACR0: u32 = 0xFF00_0038;

/// Store-queue address control register 1: binds SQ1 flushes to external
/// address bits [28:26].
pub const QACR1: u32 = 0xFF00_003C;

/// Shift applied to a destination address to extract its area bits for QACR
/// programming: `((dest >> QACR_AREA_SHIFT) << 2) & QACR_FIELD_MASK`.
pub const QACR_AREA_SHIFT: u32 = 26;

/// Mask of the QACR area field (bits [4:2]).
pub const QACR_FIELD_MASK: u32 = 0x1C;

/// PVR transfer-mode register (`LMMODE0`): selects how the chip interprets
/// addresses written through the DMA window during a transfer.
pub const PVR_LMMODE0: u32 = 0xA05F_6884;

/// Base of the write-only PVR DMA window. Bursts flushed into this window
/// are routed to graphics memory.
pub const PVR_DMA_WINDOW_BASE: u32 = 0x1100_0000;

/// Mask of the graphics-memory offset bits carried into the DMA window.
pub const PVR_DMA_OFFSET_MASK: u32 = 0x00FF_FFFF;
