//! Model event statistics collection and reporting.
//!
//! This module tracks the hardware events the model observes while a
//! primitive runs. It provides:
//! 1. **Cache events:** Lines allocated via `movca`, lines invalidated via
//!    `ocbi`, dirty write-backs on eviction.
//! 2. **Store-queue events:** Words queued and 32-byte bursts flushed.
//! 3. **Prefetch hints:** Software prefetches issued against ordinary memory.
//!
//! Tests use these counters to assert protocol shape (one allocate per
//! block, one flush per queue half per burst) without mocking the bus.

/// Event counters for a model run.
///
/// Counters only ever increase; call [`ModelStats::reset`] between phases of
/// a test to scope assertions to a single primitive invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelStats {
    /// Cache lines allocated without read (`movca.l` stores on missing lines).
    pub lines_allocated: u64,
    /// Cache lines discarded by `ocbi`.
    pub lines_invalidated: u64,
    /// Dirty lines written back to RAM on eviction.
    pub writebacks: u64,
    /// Words staged into a store-queue half.
    pub words_queued: u64,
    /// 32-byte store-queue bursts flushed to external memory.
    pub bursts_flushed: u64,
    /// Prefetch hints issued against ordinary (non-queue) addresses.
    pub prefetch_hints: u64,
}

impl ModelStats {
    /// Creates a zeroed statistics block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines_allocated: 0,
            lines_invalidated: 0,
            writebacks: 0,
            words_queued: 0,
            bursts_flushed: 0,
            prefetch_hints: 0,
        }
    }

    /// Clears all counters.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Renders a one-line human-readable summary.
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "alloc={} inval={} wb={} queued={} flushed={} pref={}",
            self.lines_allocated,
            self.lines_invalidated,
            self.writebacks,
            self.words_queued,
            self.bursts_flushed,
            self.prefetch_hints,
        )
    }
}
