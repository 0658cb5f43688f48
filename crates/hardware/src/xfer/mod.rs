//! The transfer primitives.
//!
//! This module contains the four bulk-transfer entry points:
//! 1. **[`cache_copy`]:** 32-byte-block copy using allocate-stores and a
//!    one-line prefetch pitch.
//! 2. **[`cache_fill`] / [`cache_fill_any`]:** Backward-walking block fill
//!    with a replicated byte value, plus the any-alignment variant.
//! 3. **[`sq_copy`]:** 64-byte-burst copy through the two store queues.
//! 4. **[`pvr_copy`]:** Graphics-memory adapter over [`sq_copy`].
//!
//! All routines are generic over the [`hal`](crate::hal) port traits and
//! perform no validation: alignment and size-multiple preconditions are
//! documented caller contracts, and violating them is undefined behavior on
//! hardware (data corruption or lock-up, never a reported error).

/// Cache-allocating block copy.
pub mod copy;
/// Cache-allocating block fill (aligned and any-alignment variants).
pub mod fill;
/// Graphics-memory transfer adapter.
pub mod pvr;
/// Store-queue burst copy.
pub mod sq;

pub use copy::cache_copy;
pub use fill::{cache_fill, cache_fill_any};
pub use pvr::{TransferMode, pvr_copy};
pub use sq::sq_copy;
