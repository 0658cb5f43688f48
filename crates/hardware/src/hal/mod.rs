//! Hardware port traits.
//!
//! The transfer primitives never touch memory or registers directly; they
//! are written against the two traits in this module. It provides:
//! 1. **`MemoryPort`:** Plain loads/stores plus the three cache-control
//!    operations (`movca.l`, `pref`, `ocbi`) the protocols depend on.
//! 2. **`RegisterPort`:** Access to the memory-mapped control registers
//!    (QACR0/1, `LMMODE0`).
//!
//! On target these bind to inline assembly over raw pointers; off target the
//! [`SoftBus`](crate::model::SoftBus) model implements both. The split keeps
//! every algorithm testable on a host while the generated code on a real
//! SH-4 collapses to the same instruction sequence as the hand-written
//! routines.
//!
//! All operations are infallible by design: the hardware gives no completion
//! or error signal for any of them, and the primitives' preconditions are
//! documented caller contracts rather than runtime checks.

use crate::common::PhysAddr;

/// Memory access and cache-control operations.
///
/// Word accesses are little-endian and assume word-aligned addresses;
/// misaligned word access is undefined behavior on the target hardware and
/// is not given better semantics by implementations of this trait.
pub trait MemoryPort {
    /// Reads one byte.
    fn read_u8(&mut self, addr: PhysAddr) -> u8;

    /// Writes one byte.
    fn write_u8(&mut self, addr: PhysAddr, val: u8);

    /// Reads a 32-bit word.
    fn read_u32(&mut self, addr: PhysAddr) -> u32;

    /// Writes a 32-bit word.
    fn write_u32(&mut self, addr: PhysAddr, val: u32);

    /// Stores a word through a cache-line-allocate store (`movca.l`).
    ///
    /// Allocates and dirties the destination's cache line for write-back
    /// without first reading the line's old contents from memory. The
    /// remaining words of the line hold unspecified data until written;
    /// callers must write the whole line before it can be observed.
    fn allocate_line_store(&mut self, addr: PhysAddr, val: u32);

    /// Issues a prefetch hint (`pref`).
    ///
    /// For ordinary memory this is a request to bring the line toward the
    /// cache and has no architectural effect. For an address inside the
    /// store-queue area it triggers the hardware flush of that queue half.
    fn prefetch(&mut self, addr: PhysAddr);

    /// Invalidates the cache line containing `addr` (`ocbi`).
    ///
    /// Discards the line without write-back, including dirty data. Used
    /// after a store-queue burst so stale CPU cache lines cannot shadow the
    /// data the hardware wrote behind the cache's back.
    fn invalidate_line(&mut self, addr: PhysAddr);
}

/// Memory-mapped control register access.
///
/// Register addresses are raw `u32` values from
/// [`common::constants`](crate::common::constants); they live in the P4
/// control area and are never subject to the cache, so they are kept apart
/// from [`MemoryPort`] addresses.
pub trait RegisterPort {
    /// Reads a 32-bit control register.
    fn read_register(&mut self, addr: u32) -> u32;

    /// Writes a 32-bit control register.
    fn write_register(&mut self, addr: u32, val: u32);
}
