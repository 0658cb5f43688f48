//! Model construction errors.
//!
//! The transfer primitives themselves report nothing: their preconditions
//! are caller contracts and violations are undefined behavior, matching the
//! hardware routines they model. The only fallible path in the crate is
//! building a [`SoftBus`](crate::model::SoftBus) from a configuration, which
//! validates the memory map and cache geometry up front.

use thiserror::Error;

/// Errors raised while validating a [`Config`](crate::config::Config) during
/// model construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// RAM size must be a whole number of cache lines so every line index
    /// maps to backed memory.
    #[error("RAM size {0:#x} is not a multiple of the 32-byte cache line")]
    RamSizeNotLineMultiple(usize),

    /// RAM base must be line-aligned for the cache index math to hold.
    #[error("RAM base {0:#x} is not cache-line aligned")]
    RamBaseMisaligned(u32),

    /// VRAM cannot exceed the 16 MiB the DMA window can address.
    #[error("VRAM size {0:#x} exceeds the 16 MiB DMA window")]
    VramExceedsWindow(usize),

    /// Cache size must be a positive multiple of the line size.
    #[error("cache size {0:#x} is not a positive multiple of the line size")]
    CacheSizeInvalid(usize),
}
