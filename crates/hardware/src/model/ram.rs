//! RAM/VRAM buffer implementation.
//!
//! This module provides a safe wrapper around raw memory allocation for the
//! modeled RAM and VRAM regions. It uses lazy allocation via `mmap` on Unix
//! systems so a full 16 MiB Dreamcast memory map costs host pages only where
//! a test actually touches it.

use std::slice;

/// A wrapper around a raw byte buffer backing a modeled memory region.
///
/// On Unix this uses `mmap` to allocate anonymous memory, which gives
/// zero-filled, lazily committed pages; elsewhere it falls back to a `Vec`.
pub struct RamBuffer {
    ptr: *mut u8,
    size: usize,
    is_mmap: bool,
}

// SAFETY: the buffer owns its allocation exclusively; &self methods only
// read and &mut-pattern use is enforced by the owning SoftBus.
unsafe impl Send for RamBuffer {}
unsafe impl Sync for RamBuffer {}

impl core::fmt::Debug for RamBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RamBuffer")
            .field("size", &self.size)
            .field("is_mmap", &self.is_mmap)
            .finish_non_exhaustive()
    }
}

impl RamBuffer {
    /// Creates a zero-filled buffer of the specified size.
    ///
    /// # Panics
    ///
    /// Panics if `mmap` fails on Unix.
    #[must_use]
    pub fn new(size: usize) -> Self {
        #[cfg(unix)]
        {
            use std::ptr;
            // SAFETY: anonymous private mapping with no file descriptor;
            // the result is checked against MAP_FAILED before use.
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    size.max(1),
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };

            assert!(
                ptr != libc::MAP_FAILED,
                "failed to mmap model buffer of size {size}"
            );

            Self {
                ptr: ptr.cast::<u8>(),
                size,
                is_mmap: true,
            }
        }

        #[cfg(not(unix))]
        {
            let mut vec = vec![0u8; size.max(1)];
            let ptr = vec.as_mut_ptr();
            std::mem::forget(vec);
            Self {
                ptr,
                size,
                is_mmap: false,
            }
        }
    }

    /// Returns the size of the buffer in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer has zero length.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reads a single byte.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of bounds.
    #[must_use]
    pub fn read_u8(&self, offset: usize) -> u8 {
        assert!(offset < self.size, "model RAM read out of bounds");
        // SAFETY: bounds checked above; allocation is live for &self.
        unsafe { *self.ptr.add(offset) }
    }

    /// Writes a single byte.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of bounds.
    pub fn write_u8(&mut self, offset: usize, val: u8) {
        assert!(offset < self.size, "model RAM write out of bounds");
        // SAFETY: bounds checked above; exclusive access via &mut self.
        unsafe {
            *self.ptr.add(offset) = val;
        }
    }

    /// Reads a little-endian 32-bit word.
    ///
    /// # Panics
    ///
    /// Panics if the word crosses the end of the buffer.
    #[must_use]
    pub fn read_u32(&self, offset: usize) -> u32 {
        let b = self.read_slice(offset, 4);
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Writes a little-endian 32-bit word.
    ///
    /// # Panics
    ///
    /// Panics if the word crosses the end of the buffer.
    pub fn write_u32(&mut self, offset: usize, val: u32) {
        self.write_slice(offset, &val.to_le_bytes());
    }

    /// Borrows a slice of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    #[must_use]
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        assert!(offset + len <= self.size, "model RAM read out of bounds");
        // SAFETY: bounds checked above; lifetime tied to &self.
        unsafe { slice::from_raw_parts(self.ptr.add(offset), len) }
    }

    /// Copies a byte slice into the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) {
        assert!(
            offset + data.len() <= self.size,
            "model RAM write out of bounds"
        );
        // SAFETY: bounds checked above; source and destination cannot
        // overlap because the source is a separate Rust allocation.
        unsafe {
            std::ptr::copy_nonoverlapping(data.as_ptr(), self.ptr.add(offset), data.len());
        }
    }
}

impl Drop for RamBuffer {
    fn drop(&mut self) {
        if self.is_mmap {
            #[cfg(unix)]
            // SAFETY: ptr/size are the exact values returned by mmap.
            unsafe {
                let _ = libc::munmap(self.ptr.cast(), self.size.max(1));
            }
        } else {
            #[cfg(not(unix))]
            // SAFETY: reconstructs the Vec forgotten in new().
            unsafe {
                let _ = Vec::from_raw_parts(self.ptr, self.size.max(1), self.size.max(1));
            }
        }
    }
}
