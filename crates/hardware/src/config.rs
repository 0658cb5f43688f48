//! Configuration for the functional hardware model.
//!
//! This module defines the configuration structures used to parameterize the
//! host-side model. It provides:
//! 1. **Defaults:** Baseline Dreamcast memory-map constants (RAM, VRAM, cache).
//! 2. **Structures:** Hierarchical config for the system memory map and the
//!    operand cache geometry.
//!
//! Configuration is supplied as JSON from a harness, or use
//! `Config::default()` for the stock Dreamcast layout. The transfer
//! primitives themselves take no configuration; only the model does.

use serde::Deserialize;

use crate::common::constants::CACHE_LINE_BYTES;

/// Default configuration constants for the model.
///
/// These values reproduce the stock Dreamcast memory map and operand-cache
/// geometry when not explicitly overridden.
pub mod defaults {
    /// Base address of main system RAM.
    ///
    /// This is the physical address where work RAM begins on the Dreamcast
    /// memory map; transfer sources and CPU-side destinations live here.
    pub const RAM_BASE: u32 = 0x0C00_0000;

    /// Total size of main system RAM (16 MiB).
    pub const RAM_SIZE: usize = 16 * 1024 * 1024;

    /// Total size of graphics memory reachable through the DMA window (8 MiB).
    pub const VRAM_SIZE: usize = 8 * 1024 * 1024;

    /// Operand cache size in bytes (8 KiB of the 16 KiB OC in copy-back use).
    pub const CACHE_SIZE: usize = 8 * 1024;
}

/// Root configuration structure for the model.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use sqxfer_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.system.ram_base, 0x0C00_0000);
/// assert!(config.cache.enabled);
/// ```
///
/// Deserializing from JSON (typical harness usage):
///
/// ```
/// use sqxfer_core::config::Config;
///
/// let json = r#"{
///     "system": { "ram_base": 201326592, "ram_size": 1048576, "vram_size": 65536 },
///     "cache": { "enabled": true, "size_bytes": 1024 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.system.ram_size, 1048576);
/// assert_eq!(config.cache.size_bytes, 1024);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// System memory map (RAM and VRAM geometry).
    #[serde(default)]
    pub system: SystemConfig,
    /// Operand cache geometry.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// System memory map configuration.
///
/// Defines where main RAM sits in the physical address space and how much
/// RAM and VRAM the model backs with host memory.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Main RAM base address.
    #[serde(default = "SystemConfig::default_ram_base")]
    pub ram_base: u32,

    /// Main RAM size in bytes.
    #[serde(default = "SystemConfig::default_ram_size")]
    pub ram_size: usize,

    /// Graphics memory size in bytes (reachable through the DMA window).
    #[serde(default = "SystemConfig::default_vram_size")]
    pub vram_size: usize,
}

impl SystemConfig {
    /// Returns the default RAM base address.
    fn default_ram_base() -> u32 {
        defaults::RAM_BASE
    }

    /// Returns the default RAM size.
    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    /// Returns the default VRAM size.
    fn default_vram_size() -> usize {
        defaults::VRAM_SIZE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
            vram_size: defaults::VRAM_SIZE,
        }
    }
}

/// Operand cache configuration.
///
/// The line size is fixed at 32 bytes by the `movca`/`ocbi` protocol; only
/// the total size and the enable flag vary.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// When false, all RAM accesses bypass the cache model.
    #[serde(default = "CacheConfig::default_enabled")]
    pub enabled: bool,

    /// Total cache size in bytes (must be a positive multiple of 32).
    #[serde(default = "CacheConfig::default_size_bytes")]
    pub size_bytes: usize,
}

impl CacheConfig {
    /// Cache model is enabled by default.
    fn default_enabled() -> bool {
        true
    }

    /// Returns the default cache size.
    fn default_size_bytes() -> usize {
        defaults::CACHE_SIZE
    }

    /// Number of lines implied by this geometry.
    #[must_use]
    pub const fn num_lines(&self) -> usize {
        self.size_bytes / CACHE_LINE_BYTES
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size_bytes: defaults::CACHE_SIZE,
        }
    }
}
