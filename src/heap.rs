//! Ergonomic wrapper around [`BuddyCore`]: `Option`/`NonNull`-flavored entry
//! points instead of the raw null-or-pointer convention, plus a
//! [`Layout`]-aware path for callers that think in terms of alignment.
//!
//! `BuddyHeap` never duplicates the core's logic; it only adapts calling
//! conventions, mirroring how a lower-level block/list layer backs a small
//! ergonomic allocator façade.

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::core::{BuddyCore, InitError};
use crate::reserve::ProcessBreak;
use crate::stats::HeapStats;

/// The natural alignment the core allocator guarantees for every block: the
/// header is a `u64` and all block sizes are powers of two `>= 16`.
pub const NATURAL_ALIGN: usize = 8;

pub struct BuddyHeap<B: ProcessBreak> {
  core: BuddyCore<B>,
}

impl<B: ProcessBreak> BuddyHeap<B> {
  pub fn try_new(backend: B) -> Result<Self, InitError> {
    Ok(BuddyHeap { core: BuddyCore::try_new(backend)? })
  }

  /// Allocates `size` bytes, or `None` if the request is too large or
  /// backing memory could not be reserved.
  pub fn alloc_bytes(&mut self, size: usize) -> Option<NonNull<u8>> {
    NonNull::new(self.core.allocate(size))
  }

  /// Allocates memory satisfying `layout`, rejecting alignments stricter
  /// than [`NATURAL_ALIGN`] (the core makes no stronger guarantee).
  pub fn alloc_layout(&mut self, layout: Layout) -> Option<NonNull<u8>> {
    if layout.align() > NATURAL_ALIGN {
      return None;
    }
    self.alloc_bytes(layout.size())
  }

  /// Returns a block obtained from this same heap via `alloc_bytes` or
  /// `alloc_layout`.
  ///
  /// # Safety
  ///
  /// See [`BuddyCore::release`]: `ptr` must not have been released since
  /// it was handed out.
  pub unsafe fn dealloc_bytes(&mut self, ptr: NonNull<u8>) {
    unsafe { self.core.release(ptr.as_ptr()) };
  }

  pub fn stats(&self) -> HeapStats {
    self.core.stats()
  }
}
