//! Graphics-memory transfer adapter.
//!
//! A thin adapter over [`sq_copy`]: programs the PVR transfer-mode register
//! and remaps the destination's graphics-memory offset into the write-only
//! DMA window before delegating. The mode register must be written first —
//! it changes how the chip interprets addresses written through the window
//! during the delegated copy.

use crate::common::PhysAddr;
use crate::common::constants::{PVR_DMA_OFFSET_MASK, PVR_DMA_WINDOW_BASE, PVR_LMMODE0};
use crate::hal::{MemoryPort, RegisterPort};

use super::sq::sq_copy;

/// Graphics-memory bank access layout for a PVR transfer.
///
/// Values are the raw `LMMODE0` register encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum TransferMode {
    /// 64-bit interleaved bank access (texture layout).
    #[default]
    Vram64 = 0,
    /// 32-bit linear bank access (framebuffer layout).
    Vram32 = 1,
}

/// Copies `len` bytes from `src` into graphics memory at `dst`.
///
/// `dst` is a graphics-memory address; only its low 24 bits select the
/// destination, remapped into the DMA write window. The copy itself runs
/// through [`sq_copy`], so its preconditions and exclusivity contract apply
/// unchanged; additionally the caller owns the `LMMODE0` register for the
/// duration.
///
/// # Preconditions (caller contract, unchecked)
///
/// * `dst` is 64-byte aligned within graphics memory; `src` is word-aligned.
/// * `len` is a multiple of 64.
pub fn pvr_copy<B: MemoryPort + RegisterPort>(
    bus: &mut B,
    dst: PhysAddr,
    src: PhysAddr,
    len: usize,
    mode: TransferMode,
) {
    // Mode first: it affects address interpretation for the whole transfer.
    bus.write_register(PVR_LMMODE0, mode as u32);

    let window = PhysAddr::new((dst.val() & PVR_DMA_OFFSET_MASK) | PVR_DMA_WINDOW_BASE);
    sq_copy(bus, window, src, len);
}
