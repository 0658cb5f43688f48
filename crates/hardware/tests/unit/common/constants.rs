//! Protocol constant unit tests.
//!
//! The register map is a hardware contract, not a tunable: these tests pin
//! the exact values and the relationships between them so a typo in one
//! constant fails loudly instead of silently retargeting a register.

use sqxfer_core::common::constants::*;

#[test]
fn block_geometry() {
    assert_eq!(CACHE_LINE_BYTES, 32);
    assert_eq!(SQ_BURST_BYTES, 64, "one burst is both queue halves");
    assert_eq!(WORDS_PER_LINE * WORD_BYTES as usize, CACHE_LINE_BYTES);
    assert_eq!(
        PREFETCH_PITCH_WORDS * WORD_BYTES,
        CACHE_LINE_BYTES as u32,
        "the prefetch pitch is exactly one line"
    );
}

#[test]
fn store_queue_map() {
    assert_eq!(SQ_AREA_BASE, 0xE000_0000);
    assert_eq!(SQ0_BASE, 0xE000_0000);
    assert_eq!(SQ1_BASE, 0xE000_0020);
    assert_eq!(
        SQ1_BASE - SQ0_BASE,
        CACHE_LINE_BYTES as u32,
        "the halves are adjacent 32-byte windows"
    );
    assert_eq!(1 << SQ_SELECT_BIT, SQ1_BASE - SQ0_BASE);
}

#[test]
fn sq_offset_mask_covers_bits_25_to_5() {
    assert_eq!(SQ_AREA_OFFSET_MASK, 0x03FF_FFE0);
    // Line-aligned and within the 64 MiB window.
    assert_eq!(SQ_AREA_OFFSET_MASK & 0x1F, 0);
    assert_eq!(SQ_AREA_OFFSET_MASK >> 26, 0);
}

#[test]
fn qacr_registers() {
    assert_eq!(QACR0, 0xFF00_0038);
    assert_eq!(QACR1, 0xFF00_003C);
    assert_eq!(QACR_AREA_SHIFT, 26);
    assert_eq!(QACR_FIELD_MASK, 0x1C, "area field occupies bits [4:2]");
}

#[test]
fn pvr_map() {
    assert_eq!(PVR_LMMODE0, 0xA05F_6884);
    assert_eq!(PVR_DMA_WINDOW_BASE, 0x1100_0000);
    assert_eq!(PVR_DMA_OFFSET_MASK, 0x00FF_FFFF);
}
