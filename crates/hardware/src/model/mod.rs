//! Functional model of the memory subsystem the primitives touch.
//!
//! This module provides a host-side model faithful enough to exercise every
//! protocol the transfer primitives rely on. It includes:
//! 1. **RAM/VRAM:** mmap-backed byte buffers ([`ram::RamBuffer`]).
//! 2. **Operand cache:** Direct-mapped write-back cache with `movca`/`ocbi`
//!    semantics ([`cache::CacheModel`]).
//! 3. **Store queues:** The two 8-word queues with QACR address binding
//!    ([`store_queue::StoreQueueUnit`]).
//! 4. **Bus:** [`SoftBus`], the address decoder that ties them together and
//!    implements both hardware port traits.
//!
//! The model is functional, not cycle-accurate: it reproduces what ends up
//! in memory and in what order state becomes observable, not how long
//! anything takes.

/// Direct-mapped write-back operand cache model.
pub mod cache;
/// mmap-backed RAM/VRAM buffer.
pub mod ram;
/// Store-queue pair with QACR address binding.
pub mod store_queue;

use tracing::{debug, trace};

use crate::common::constants::{
    CACHE_LINE_BYTES, PVR_DMA_OFFSET_MASK, PVR_DMA_WINDOW_BASE, PVR_LMMODE0, QACR0, QACR1,
    SQ_BURST_BYTES,
};
use crate::common::{ConfigError, PhysAddr};
use crate::config::Config;
use crate::hal::{MemoryPort, RegisterPort};
use crate::stats::ModelStats;

use self::cache::CacheModel;
use self::ram::RamBuffer;
use self::store_queue::StoreQueueUnit;

/// Start of the store-queue alias area (inclusive).
const SQ_AREA_START: u32 = 0xE000_0000;
/// End of the store-queue alias area (exclusive).
const SQ_AREA_END: u32 = 0xE400_0000;

/// Host-side bus model implementing [`MemoryPort`] and [`RegisterPort`].
///
/// Decodes each access by address: main RAM goes through the operand cache,
/// the store-queue area goes to the queue pair, and bursts flushed into the
/// PVR DMA window are routed to VRAM. Control registers (QACR0/1, `LMMODE0`)
/// are reached only through [`RegisterPort`].
#[derive(Debug)]
pub struct SoftBus {
    ram: RamBuffer,
    ram_base: u32,
    vram: RamBuffer,
    cache: CacheModel,
    sq: StoreQueueUnit,
    lmmode0: u32,
    /// Event counters; reset freely between test phases.
    pub stats: ModelStats,
}

impl SoftBus {
    /// Builds a bus model from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the memory map or cache geometry is
    /// inconsistent (misaligned RAM base, RAM or cache size not a line
    /// multiple, VRAM larger than the DMA window can address).
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let sys = &config.system;
        if sys.ram_base as usize % CACHE_LINE_BYTES != 0 {
            return Err(ConfigError::RamBaseMisaligned(sys.ram_base));
        }
        if sys.ram_size == 0 || sys.ram_size % CACHE_LINE_BYTES != 0 {
            return Err(ConfigError::RamSizeNotLineMultiple(sys.ram_size));
        }
        if sys.vram_size > (PVR_DMA_OFFSET_MASK as usize + 1) {
            return Err(ConfigError::VramExceedsWindow(sys.vram_size));
        }
        let cache = CacheModel::new(&config.cache)?;

        debug!(
            ram_base = %PhysAddr::new(sys.ram_base),
            ram_size = sys.ram_size,
            vram_size = sys.vram_size,
            "bus model constructed"
        );

        Ok(Self {
            ram: RamBuffer::new(sys.ram_size),
            ram_base: sys.ram_base,
            vram: RamBuffer::new(sys.vram_size),
            cache,
            sq: StoreQueueUnit::new(),
            lmmode0: 0,
            stats: ModelStats::new(),
        })
    }

    /// Returns `true` if `addr` falls inside modeled main RAM.
    #[must_use]
    pub fn is_ram(&self, addr: PhysAddr) -> bool {
        let a = addr.val();
        a >= self.ram_base && ((a - self.ram_base) as usize) < self.ram.len()
    }

    /// Reads a VRAM byte directly (debug/readback path, no window remap).
    #[must_use]
    pub fn vram_u8(&self, offset: usize) -> u8 {
        self.vram.read_u8(offset)
    }

    /// Returns the last value written to the PVR `LMMODE0` register.
    #[must_use]
    pub const fn lmmode0(&self) -> u32 {
        self.lmmode0
    }

    /// Returns `true` if both store-queue halves are idle (drained).
    #[must_use]
    pub const fn store_queues_idle(&self) -> bool {
        self.sq.is_idle()
    }

    /// Copies bytes into RAM behind the cache (test setup only).
    ///
    /// # Panics
    ///
    /// Panics if the range is outside modeled RAM.
    pub fn load_ram(&mut self, addr: PhysAddr, data: &[u8]) {
        let off = (addr.val() - self.ram_base) as usize;
        self.ram.write_slice(off, data);
    }

    /// Reads bytes from RAM behind the cache (test inspection only).
    ///
    /// # Panics
    ///
    /// Panics if the range is outside modeled RAM.
    #[must_use]
    pub fn peek_ram(&self, addr: PhysAddr, len: usize) -> Vec<u8> {
        let off = (addr.val() - self.ram_base) as usize;
        self.ram.read_slice(off, len).to_vec()
    }

    /// Writes every dirty cache line back to RAM (test inspection helper;
    /// the hardware analogue is an `ocbwb` sweep).
    pub fn flush_cache(&mut self) {
        self.cache
            .writeback_all(self.ram_base, &mut self.ram, &mut self.stats);
    }

    fn ram_offset(&self, addr: PhysAddr) -> usize {
        debug_assert!(self.is_ram(addr), "access outside modeled RAM: {addr}");
        (addr.val() - self.ram_base) as usize
    }

    const fn in_sq_area(addr: PhysAddr) -> bool {
        addr.val() >= SQ_AREA_START && addr.val() < SQ_AREA_END
    }

    const fn in_pvr_window(addr: u32) -> bool {
        addr >= PVR_DMA_WINDOW_BASE && addr < PVR_DMA_WINDOW_BASE + (PVR_DMA_OFFSET_MASK + 1)
    }

    /// Writes a flushed 32-byte burst to its external destination, bypassing
    /// the operand cache. Bursts into the PVR window land in VRAM; anything
    /// else must be RAM.
    fn commit_burst(&mut self, ext: u32, words: &[u32; 8]) {
        trace!(ext = %PhysAddr::new(ext), "store queue burst");
        self.stats.bursts_flushed += 1;
        for (i, w) in words.iter().enumerate() {
            let addr = ext + (i as u32) * 4;
            let bytes = w.to_le_bytes();
            if Self::in_pvr_window(addr) {
                let off = (addr & PVR_DMA_OFFSET_MASK) as usize;
                self.vram.write_slice(off, &bytes);
            } else {
                let off = self.ram_offset(PhysAddr::new(addr));
                self.ram.write_slice(off, &bytes);
            }
        }
    }
}

impl MemoryPort for SoftBus {
    fn read_u8(&mut self, addr: PhysAddr) -> u8 {
        let off = self.ram_offset(addr);
        self.cache
            .read_u8(addr, off, &mut self.ram, &mut self.stats)
    }

    fn write_u8(&mut self, addr: PhysAddr, val: u8) {
        let off = self.ram_offset(addr);
        self.cache
            .write_u8(addr, off, val, &mut self.ram, &mut self.stats);
    }

    fn read_u32(&mut self, addr: PhysAddr) -> u32 {
        let off = self.ram_offset(addr);
        self.cache
            .read_u32(addr, off, &mut self.ram, &mut self.stats)
    }

    fn write_u32(&mut self, addr: PhysAddr, val: u32) {
        if Self::in_sq_area(addr) {
            self.stats.words_queued += 1;
            self.sq.write(addr.val(), val);
            return;
        }
        let off = self.ram_offset(addr);
        self.cache
            .write_u32(addr, off, val, &mut self.ram, &mut self.stats);
    }

    fn allocate_line_store(&mut self, addr: PhysAddr, val: u32) {
        // movca.l to the queue area behaves as a plain queue store.
        if Self::in_sq_area(addr) {
            self.stats.words_queued += 1;
            self.sq.write(addr.val(), val);
            return;
        }
        let off = self.ram_offset(addr);
        self.cache
            .allocate_store(addr, off, val, &mut self.ram, &mut self.stats);
    }

    fn prefetch(&mut self, addr: PhysAddr) {
        if Self::in_sq_area(addr) {
            if let Some((ext, words)) = self.sq.flush(addr.val()) {
                self.commit_burst(ext, &words);
            }
            return;
        }
        // Software hint only; the functional model has no latency to hide.
        self.stats.prefetch_hints += 1;
    }

    fn invalidate_line(&mut self, addr: PhysAddr) {
        self.cache.invalidate(addr, &mut self.stats);
    }
}

impl RegisterPort for SoftBus {
    fn read_register(&mut self, addr: u32) -> u32 {
        match addr {
            QACR0 => self.sq.qacr(0),
            QACR1 => self.sq.qacr(1),
            PVR_LMMODE0 => self.lmmode0,
            _ => {
                trace!(addr, "read of unmapped register");
                0
            }
        }
    }

    fn write_register(&mut self, addr: u32, val: u32) {
        match addr {
            QACR0 => self.sq.set_qacr(0, val),
            QACR1 => self.sq.set_qacr(1, val),
            PVR_LMMODE0 => {
                debug!(mode = val, "LMMODE0 set");
                self.lmmode0 = val;
            }
            _ => {
                trace!(addr, val, "write to unmapped register ignored");
            }
        }
    }
}

// Compile-time check that a full burst is two cache lines.
const _: () = assert!(SQ_BURST_BYTES == 2 * CACHE_LINE_BYTES);
