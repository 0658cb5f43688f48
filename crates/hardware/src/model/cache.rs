//! Direct-mapped write-back operand cache model.
//!
//! This module models the slice of operand-cache behavior the transfer
//! primitives depend on:
//! 1. **Write-allocate:** An ordinary store miss fetches the line from RAM
//!    before writing (the read-for-ownership `movca` exists to avoid).
//! 2. **Allocate-without-read:** `movca.l` installs the line and dirties it
//!    without touching RAM; unwritten words of the line are filled with a
//!    poison byte so an algorithm that fails to write the whole block is
//!    caught by the tests instead of silently reading zeros.
//! 3. **Invalidate:** `ocbi` discards a line, dirty data included, with no
//!    write-back.
//! 4. **Eviction:** A dirty victim is written back to RAM before its slot is
//!    reused.
//!
//! Direct-mapped is sufficient here: the protocols under test never rely on
//! associativity, only on line state transitions.

use tracing::trace;

use crate::common::constants::CACHE_LINE_BYTES;
use crate::common::{ConfigError, PhysAddr};
use crate::config::CacheConfig;
use crate::stats::ModelStats;

use super::ram::RamBuffer;

/// Byte pattern filled into a line allocated without read.
///
/// Deliberately not zero: freshly allocated lines must be fully overwritten
/// by the caller, and a recognizable pattern turns a missed word into a test
/// failure rather than a coincidence.
pub const ALLOC_POISON: u8 = 0xA5;

/// Cache line state: tag, validity, and dirty bit.
#[derive(Clone, Copy, Default)]
struct Line {
    tag: u32,
    valid: bool,
    dirty: bool,
}

/// Direct-mapped write-back cache with 32-byte lines.
///
/// Line data is stored inline; RAM is only touched on fill, write-back, and
/// when the cache is disabled.
pub struct CacheModel {
    enabled: bool,
    num_lines: usize,
    lines: Vec<Line>,
    data: Vec<u8>,
}

impl core::fmt::Debug for CacheModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CacheModel")
            .field("enabled", &self.enabled)
            .field("num_lines", &self.num_lines)
            .finish_non_exhaustive()
    }
}

impl CacheModel {
    /// Creates a cache model from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CacheSizeInvalid`] if the size is zero or not
    /// a multiple of the 32-byte line.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        if config.size_bytes == 0 || config.size_bytes % CACHE_LINE_BYTES != 0 {
            return Err(ConfigError::CacheSizeInvalid(config.size_bytes));
        }
        let num_lines = config.num_lines();
        Ok(Self {
            enabled: config.enabled,
            num_lines,
            lines: vec![Line::default(); num_lines],
            data: vec![0; num_lines * CACHE_LINE_BYTES],
        })
    }

    #[inline]
    fn index_of(&self, addr: PhysAddr) -> usize {
        (addr.val() as usize / CACHE_LINE_BYTES) % self.num_lines
    }

    #[inline]
    fn tag_of(&self, addr: PhysAddr) -> u32 {
        addr.val() / (CACHE_LINE_BYTES * self.num_lines) as u32
    }

    /// Physical line-base address of the line currently held in `index`.
    #[inline]
    fn resident_base(&self, index: usize) -> u32 {
        (self.lines[index].tag as usize * self.num_lines + index) as u32
            * CACHE_LINE_BYTES as u32
    }

    fn line_data(&mut self, index: usize) -> &mut [u8] {
        let start = index * CACHE_LINE_BYTES;
        &mut self.data[start..start + CACHE_LINE_BYTES]
    }

    /// Writes a dirty victim back to RAM. `base` is the physical address
    /// RAM offset zero corresponds to.
    fn writeback(&mut self, index: usize, base: u32, ram: &mut RamBuffer, stats: &mut ModelStats) {
        let victim_base = self.resident_base(index);
        let off = (victim_base - base) as usize;
        let start = index * CACHE_LINE_BYTES;
        ram.write_slice(off, &self.data[start..start + CACHE_LINE_BYTES]);
        stats.writebacks += 1;
        trace!(line = %PhysAddr::new(victim_base), "dirty write-back");
    }

    /// Ensures the line for `addr` is resident, filling from RAM on a miss.
    /// Returns the line index.
    fn fill(
        &mut self,
        addr: PhysAddr,
        off: usize,
        ram: &mut RamBuffer,
        stats: &mut ModelStats,
    ) -> usize {
        let index = self.index_of(addr);
        let tag = self.tag_of(addr);
        let line = self.lines[index];
        if line.valid && line.tag == tag {
            return index;
        }
        let base = addr.val() - off as u32;
        if line.valid && line.dirty {
            self.writeback(index, base, ram, stats);
        }
        let line_off = off & !(CACHE_LINE_BYTES - 1);
        let src = ram.read_slice(line_off, CACHE_LINE_BYTES).to_vec();
        self.line_data(index).copy_from_slice(&src);
        self.lines[index] = Line {
            tag,
            valid: true,
            dirty: false,
        };
        index
    }

    /// Reads one byte through the cache.
    pub fn read_u8(
        &mut self,
        addr: PhysAddr,
        off: usize,
        ram: &mut RamBuffer,
        stats: &mut ModelStats,
    ) -> u8 {
        if !self.enabled {
            return ram.read_u8(off);
        }
        let index = self.fill(addr, off, ram, stats);
        let within = off % CACHE_LINE_BYTES;
        self.line_data(index)[within]
    }

    /// Writes one byte through the cache (write-allocate).
    pub fn write_u8(
        &mut self,
        addr: PhysAddr,
        off: usize,
        val: u8,
        ram: &mut RamBuffer,
        stats: &mut ModelStats,
    ) {
        if !self.enabled {
            ram.write_u8(off, val);
            return;
        }
        let index = self.fill(addr, off, ram, stats);
        let within = off % CACHE_LINE_BYTES;
        self.line_data(index)[within] = val;
        self.lines[index].dirty = true;
    }

    /// Reads a little-endian word through the cache.
    pub fn read_u32(
        &mut self,
        addr: PhysAddr,
        off: usize,
        ram: &mut RamBuffer,
        stats: &mut ModelStats,
    ) -> u32 {
        if !self.enabled {
            return ram.read_u32(off);
        }
        let index = self.fill(addr, off, ram, stats);
        let within = off % CACHE_LINE_BYTES;
        let d = self.line_data(index);
        u32::from_le_bytes([d[within], d[within + 1], d[within + 2], d[within + 3]])
    }

    /// Writes a little-endian word through the cache (write-allocate).
    pub fn write_u32(
        &mut self,
        addr: PhysAddr,
        off: usize,
        val: u32,
        ram: &mut RamBuffer,
        stats: &mut ModelStats,
    ) {
        if !self.enabled {
            ram.write_u32(off, val);
            return;
        }
        let index = self.fill(addr, off, ram, stats);
        let within = off % CACHE_LINE_BYTES;
        self.line_data(index)[within..within + 4].copy_from_slice(&val.to_le_bytes());
        self.lines[index].dirty = true;
    }

    /// `movca.l`: store a word, allocating the line without reading RAM.
    ///
    /// On a miss the dirty victim (if any) is written back, the slot is
    /// retagged, and the rest of the line is poisoned. On a hit this is an
    /// ordinary store.
    pub fn allocate_store(
        &mut self,
        addr: PhysAddr,
        off: usize,
        val: u32,
        ram: &mut RamBuffer,
        stats: &mut ModelStats,
    ) {
        if !self.enabled {
            // No cache to allocate in: degenerates to a plain word store.
            ram.write_u32(off, val);
            return;
        }
        let index = self.index_of(addr);
        let tag = self.tag_of(addr);
        let line = self.lines[index];
        if !(line.valid && line.tag == tag) {
            let base = addr.val() - off as u32;
            if line.valid && line.dirty {
                self.writeback(index, base, ram, stats);
            }
            self.line_data(index).fill(ALLOC_POISON);
            self.lines[index] = Line {
                tag,
                valid: true,
                dirty: false,
            };
            stats.lines_allocated += 1;
            trace!(line = %addr.line_base(), "line allocated without read");
        }
        let within = off % CACHE_LINE_BYTES;
        self.line_data(index)[within..within + 4].copy_from_slice(&val.to_le_bytes());
        self.lines[index].dirty = true;
    }

    /// `ocbi`: discard the line containing `addr`, dirty data included.
    pub fn invalidate(&mut self, addr: PhysAddr, stats: &mut ModelStats) {
        if !self.enabled {
            return;
        }
        let index = self.index_of(addr);
        let tag = self.tag_of(addr);
        let line = &mut self.lines[index];
        if line.valid && line.tag == tag {
            line.valid = false;
            line.dirty = false;
            stats.lines_invalidated += 1;
            trace!(line = %addr.line_base(), "line invalidated");
        }
    }

    /// Writes every dirty line back to RAM, leaving the lines valid/clean.
    ///
    /// `base` is the physical address RAM offset zero corresponds to.
    pub fn writeback_all(&mut self, base: u32, ram: &mut RamBuffer, stats: &mut ModelStats) {
        for index in 0..self.num_lines {
            if self.lines[index].valid && self.lines[index].dirty {
                self.writeback(index, base, ram, stats);
                self.lines[index].dirty = false;
            }
        }
    }
}
