//! Configuration unit tests.
//!
//! Verifies the Dreamcast defaults, JSON deserialization with partial
//! overrides, and the validation performed by model construction.

use sqxfer_core::common::ConfigError;
use sqxfer_core::config::Config;
use sqxfer_core::model::SoftBus;

#[test]
fn defaults_match_dreamcast_map() {
    let config = Config::default();
    assert_eq!(config.system.ram_base, 0x0C00_0000);
    assert_eq!(config.system.ram_size, 16 * 1024 * 1024);
    assert_eq!(config.system.vram_size, 8 * 1024 * 1024);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.size_bytes, 8 * 1024);
}

#[test]
fn json_partial_override_keeps_defaults() {
    let json = r#"{ "cache": { "size_bytes": 2048 } }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.cache.size_bytes, 2048);
    assert!(config.cache.enabled, "unnamed fields keep their defaults");
    assert_eq!(config.system.ram_base, 0x0C00_0000);
}

#[test]
fn cache_num_lines_derived_from_size() {
    let config = Config::default();
    assert_eq!(config.cache.num_lines(), 8 * 1024 / 32);
}

// ══════════════════════════════════════════════════════════
// Validation on model construction
// ══════════════════════════════════════════════════════════

#[test]
fn default_config_builds() {
    assert!(SoftBus::new(&Config::default()).is_ok());
}

#[test]
fn rejects_ram_size_not_line_multiple() {
    let mut config = Config::default();
    config.system.ram_size = 100;
    assert_eq!(
        SoftBus::new(&config).unwrap_err(),
        ConfigError::RamSizeNotLineMultiple(100)
    );
}

#[test]
fn rejects_misaligned_ram_base() {
    let mut config = Config::default();
    config.system.ram_base = 0x0C00_0010;
    assert_eq!(
        SoftBus::new(&config).unwrap_err(),
        ConfigError::RamBaseMisaligned(0x0C00_0010)
    );
}

#[test]
fn rejects_vram_larger_than_window() {
    let mut config = Config::default();
    config.system.vram_size = 32 * 1024 * 1024;
    assert_eq!(
        SoftBus::new(&config).unwrap_err(),
        ConfigError::VramExceedsWindow(32 * 1024 * 1024)
    );
}

#[test]
fn rejects_zero_cache() {
    let mut config = Config::default();
    config.cache.size_bytes = 0;
    assert_eq!(
        SoftBus::new(&config).unwrap_err(),
        ConfigError::CacheSizeInvalid(0)
    );
}

#[test]
fn config_error_messages_name_the_field() {
    let err = ConfigError::CacheSizeInvalid(7);
    assert!(err.to_string().contains("cache size"));
}
