//! Operand cache model unit tests.
//!
//! Verifies the line state machine the transfer protocols lean on:
//! allocate-without-read (`movca`), invalidate-without-writeback (`ocbi`),
//! write-allocate on ordinary stores, and dirty eviction.
//!
//! The cache is driven directly with a raw `RamBuffer` at base 0 so the
//! address/offset mapping is the identity.

use sqxfer_core::common::PhysAddr;
use sqxfer_core::config::CacheConfig;
use sqxfer_core::model::cache::{ALLOC_POISON, CacheModel};
use sqxfer_core::model::ram::RamBuffer;
use sqxfer_core::stats::ModelStats;

// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────

/// Creates a tiny two-line cache (64 bytes) so eviction is easy to force:
/// addresses 64 bytes apart share a set.
fn tiny_cache() -> CacheModel {
    CacheModel::new(&CacheConfig {
        enabled: true,
        size_bytes: 64,
    })
    .unwrap()
}

/// RAM pre-filled with 0x11 in every byte.
fn ram() -> RamBuffer {
    let mut ram = RamBuffer::new(4096);
    let fill = vec![0x11u8; 4096];
    ram.write_slice(0, &fill);
    ram
}

// ══════════════════════════════════════════════════════════
// 1. Allocate without read
// ══════════════════════════════════════════════════════════

/// `movca` must not read RAM: the untouched words of the allocated line
/// read back as poison, and RAM keeps its old contents until write-back.
#[test]
fn allocate_store_skips_memory_read() {
    let mut cache = tiny_cache();
    let mut ram = ram();
    let mut stats = ModelStats::new();

    cache.allocate_store(PhysAddr::new(0x40), 0x40, 0xDEAD_BEEF, &mut ram, &mut stats);

    assert_eq!(stats.lines_allocated, 1);
    assert_eq!(
        cache.read_u32(PhysAddr::new(0x40), 0x40, &mut ram, &mut stats),
        0xDEAD_BEEF
    );
    let poison = u32::from_le_bytes([ALLOC_POISON; 4]);
    assert_eq!(
        cache.read_u32(PhysAddr::new(0x44), 0x44, &mut ram, &mut stats),
        poison,
        "unwritten words of an allocated line are poison, not RAM data"
    );
    assert_eq!(ram.read_u32(0x40), 0x1111_1111, "RAM untouched by movca");
}

/// An allocate-store that hits an already-resident line is a plain store:
/// no re-poisoning of data written moments ago.
#[test]
fn allocate_store_hit_does_not_repoison() {
    let mut cache = tiny_cache();
    let mut ram = ram();
    let mut stats = ModelStats::new();

    cache.allocate_store(PhysAddr::new(0x40), 0x40, 1, &mut ram, &mut stats);
    cache.write_u32(PhysAddr::new(0x44), 0x44, 2, &mut ram, &mut stats);
    cache.allocate_store(PhysAddr::new(0x48), 0x48, 3, &mut ram, &mut stats);

    assert_eq!(stats.lines_allocated, 1, "second movca hit the line");
    assert_eq!(
        cache.read_u32(PhysAddr::new(0x44), 0x44, &mut ram, &mut stats),
        2
    );
}

// ══════════════════════════════════════════════════════════
// 2. Write-allocate (read-for-ownership)
// ══════════════════════════════════════════════════════════

/// An ordinary store miss fetches the line first, so neighbouring words
/// show RAM contents, not poison.
#[test]
fn write_miss_fetches_line_from_ram() {
    let mut cache = tiny_cache();
    let mut ram = ram();
    let mut stats = ModelStats::new();

    cache.write_u32(PhysAddr::new(0x80), 0x80, 0xCAFE_F00D, &mut ram, &mut stats);

    assert_eq!(stats.lines_allocated, 0);
    assert_eq!(
        cache.read_u32(PhysAddr::new(0x84), 0x84, &mut ram, &mut stats),
        0x1111_1111,
        "rest of the line came from RAM"
    );
}

// ══════════════════════════════════════════════════════════
// 3. Invalidate
// ══════════════════════════════════════════════════════════

/// `ocbi` discards dirty data: the next read refills from RAM.
#[test]
fn invalidate_discards_dirty_line() {
    let mut cache = tiny_cache();
    let mut ram = ram();
    let mut stats = ModelStats::new();

    cache.write_u32(PhysAddr::new(0x40), 0x40, 0xAAAA_5555, &mut ram, &mut stats);
    cache.invalidate(PhysAddr::new(0x40), &mut stats);

    assert_eq!(stats.lines_invalidated, 1);
    assert_eq!(stats.writebacks, 0, "invalidate never writes back");
    assert_eq!(
        cache.read_u32(PhysAddr::new(0x40), 0x40, &mut ram, &mut stats),
        0x1111_1111,
        "dirty data gone; RAM value visible again"
    );
}

/// Invalidating an address whose line is not resident is a no-op.
#[test]
fn invalidate_miss_is_noop() {
    let mut cache = tiny_cache();
    let mut stats = ModelStats::new();

    cache.invalidate(PhysAddr::new(0x200), &mut stats);
    assert_eq!(stats.lines_invalidated, 0);
}

// ══════════════════════════════════════════════════════════
// 4. Eviction
// ══════════════════════════════════════════════════════════

/// Two addresses 64 bytes apart share a set in the two-line cache; the
/// second access evicts the first, writing the dirty victim back.
#[test]
fn dirty_victim_written_back_on_eviction() {
    let mut cache = tiny_cache();
    let mut ram = ram();
    let mut stats = ModelStats::new();

    cache.write_u32(PhysAddr::new(0x00), 0x00, 0x1234_5678, &mut ram, &mut stats);
    // Same index ((0x100 / 32) % 2 == 0), different tag: evicts.
    let _ = cache.read_u32(PhysAddr::new(0x100), 0x100, &mut ram, &mut stats);

    assert_eq!(stats.writebacks, 1);
    assert_eq!(ram.read_u32(0x00), 0x1234_5678, "victim reached RAM");
}

/// `writeback_all` flushes every dirty line and leaves them clean.
#[test]
fn writeback_all_flushes_dirty_lines() {
    let mut cache = tiny_cache();
    let mut ram = ram();
    let mut stats = ModelStats::new();

    cache.write_u32(PhysAddr::new(0x00), 0x00, 7, &mut ram, &mut stats);
    cache.write_u32(PhysAddr::new(0x20), 0x20, 9, &mut ram, &mut stats);
    cache.writeback_all(0, &mut ram, &mut stats);

    assert_eq!(stats.writebacks, 2);
    assert_eq!(ram.read_u32(0x00), 7);
    assert_eq!(ram.read_u32(0x20), 9);

    // A second sweep finds nothing dirty.
    cache.writeback_all(0, &mut ram, &mut stats);
    assert_eq!(stats.writebacks, 2);
}

// ══════════════════════════════════════════════════════════
// 5. Disabled cache
// ══════════════════════════════════════════════════════════

/// With the cache disabled every access is a RAM passthrough and `movca`
/// degenerates to a plain word store.
#[test]
fn disabled_cache_passes_through() {
    let mut cache = CacheModel::new(&CacheConfig {
        enabled: false,
        size_bytes: 64,
    })
    .unwrap();
    let mut ram = ram();
    let mut stats = ModelStats::new();

    cache.allocate_store(PhysAddr::new(0x40), 0x40, 0xFEED_FACE, &mut ram, &mut stats);

    assert_eq!(ram.read_u32(0x40), 0xFEED_FACE, "store went straight to RAM");
    assert_eq!(ram.read_u32(0x44), 0x1111_1111, "no line fill, no poison");
    assert_eq!(stats.lines_allocated, 0);
}
