//! PVR transfer adapter unit tests.
//!
//! Verifies the mode-register-first ordering, the DMA-window remap, and
//! delivery into graphics memory.

use mockall::Sequence;
use pretty_assertions::assert_eq;

use sqxfer_core::common::PhysAddr;
use sqxfer_core::common::constants::PVR_LMMODE0;
use sqxfer_core::{TransferMode, pvr_copy};

use crate::common::harness::{SRC, TestContext, pattern};
use crate::common::mocks::port::MockPort;

// ══════════════════════════════════════════════════════════
// 1. Delivery into graphics memory
// ══════════════════════════════════════════════════════════

/// Data arrives in VRAM at the destination's low-24-bit offset.
#[test]
fn copy_lands_in_vram() {
    let mut ctx = TestContext::new();
    let data = pattern(5, 128);
    ctx.load(SRC, &data);

    pvr_copy(
        &mut ctx.bus,
        PhysAddr::new(0x0000_1000),
        PhysAddr::new(SRC),
        128,
        TransferMode::Vram64,
    );

    let vram: Vec<u8> = (0..128).map(|i| ctx.bus.vram_u8(0x1000 + i)).collect();
    assert_eq!(vram, data);
}

/// Only the low 24 bits of the destination select the offset: a pointer
/// carrying texture-memory high bits lands at the same place.
#[test]
fn high_destination_bits_ignored() {
    let mut ctx = TestContext::new();
    ctx.load(SRC, &[0xC3; 64]);

    pvr_copy(
        &mut ctx.bus,
        PhysAddr::new(0xA400_2000),
        PhysAddr::new(SRC),
        64,
        TransferMode::Vram64,
    );

    let vram: Vec<u8> = (0..64).map(|i| ctx.bus.vram_u8(0x2000 + i)).collect();
    assert_eq!(vram, vec![0xC3; 64]);
}

// ══════════════════════════════════════════════════════════
// 2. Mode register
// ══════════════════════════════════════════════════════════

/// The mode register holds the raw encoding of the requested layout.
#[test]
fn mode_register_programmed() {
    let mut ctx = TestContext::new();
    ctx.load(SRC, &[0u8; 64]);

    pvr_copy(
        &mut ctx.bus,
        PhysAddr::new(0),
        PhysAddr::new(SRC),
        64,
        TransferMode::Vram32,
    );
    assert_eq!(ctx.bus.lmmode0(), 1);

    pvr_copy(
        &mut ctx.bus,
        PhysAddr::new(0),
        PhysAddr::new(SRC),
        64,
        TransferMode::Vram64,
    );
    assert_eq!(ctx.bus.lmmode0(), 0);
}

/// The store-queue window is disarmed after the delegated copy.
#[test]
fn window_disarmed_after_call() {
    let mut ctx = TestContext::new();
    ctx.load(SRC, &[0u8; 64]);

    pvr_copy(
        &mut ctx.bus,
        PhysAddr::new(0),
        PhysAddr::new(SRC),
        64,
        TransferMode::Vram64,
    );

    assert!(ctx.bus.store_queues_idle());
}

// ══════════════════════════════════════════════════════════
// 3. Ordering
// ══════════════════════════════════════════════════════════

/// The mode register is written before anything else touches the bus: it
/// changes how the chip interprets the addresses of the delegated copy.
#[test]
fn mode_written_before_transfer() {
    let mut port = MockPort::new();
    let mut seq = Sequence::new();

    let _ = port
        .expect_write_register()
        .withf(|a, v| *a == PVR_LMMODE0 && *v == 1)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    // Everything after the mode write belongs to sq_copy; the first thing
    // it does is arm QACR0.
    let _ = port
        .expect_write_register()
        .withf(|_, _| true)
        .times(4)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = port.expect_read_u32().return_const(0u32);
    let _ = port.expect_write_u32().return_const(());
    let _ = port.expect_prefetch().return_const(());
    let _ = port.expect_invalidate_line().return_const(());

    pvr_copy(
        &mut port,
        PhysAddr::new(0x0000_0040),
        PhysAddr::new(0x0C01_0000),
        64,
        TransferMode::Vram32,
    );
}
