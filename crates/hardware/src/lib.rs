//! SH-4 bulk memory transfer primitives.
//!
//! This crate implements the cache-allocating and store-queue transfer
//! routines used for framebuffer blits and asset uploads on SH-4 based
//! systems (Dreamcast class). It provides the following:
//! 1. **Primitives:** Cache-allocating copy/fill, store-queue copy, and the
//!    PVR graphics-memory adapter.
//! 2. **Ports:** `MemoryPort`/`RegisterPort` traits that the primitives are
//!    written against, so the same routine drives real hardware or the model.
//! 3. **Model:** A functional host-side model of the operand cache, store
//!    queues, and PVR DMA window for off-target execution and testing.
//! 4. **Configuration:** Memory-map and cache-geometry configuration with
//!    Dreamcast defaults.
//!
//! The primitives perform no runtime validation: alignment and size-multiple
//! preconditions are caller contracts, documented per routine.

/// Common types and constants (physical addresses, hardware register map).
pub mod common;
/// Model configuration (memory map, cache geometry, defaults).
pub mod config;
/// Hardware port traits bound to intrinsics on target, to the model off target.
pub mod hal;
/// Functional model of RAM, operand cache, store queues, and the PVR window.
pub mod model;
/// Model event statistics collection and reporting.
pub mod stats;
/// The transfer primitives (cache copy/fill, store-queue copy, PVR transfer).
pub mod xfer;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Host-side bus model; implements both hardware port traits.
pub use crate::model::SoftBus;
/// Transfer entry points.
pub use crate::xfer::{TransferMode, cache_copy, cache_fill, cache_fill_any, pvr_copy, sq_copy};
