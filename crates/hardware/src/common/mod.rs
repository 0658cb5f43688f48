//! Common types shared across the primitives and the model.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Address Type:** A strong type for 32-bit physical addresses.
//! 2. **Constants:** The SH-4 store-queue and PVR register map, block sizes,
//!    and the prefetch pitch.
//! 3. **Error Handling:** Configuration validation errors for the model.

/// Physical address type and alignment helpers.
pub mod addr;

/// Hardware register map and transfer protocol constants.
pub mod constants;

/// Error types for model construction.
pub mod error;

pub use addr::PhysAddr;
pub use error::ConfigError;
