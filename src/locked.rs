//! A mutex-guarded [`BuddyHeap`] and its `GlobalAlloc` adapter.
//!
//! The core stays single-threaded by design (see the crate-level docs);
//! `LockedBuddyHeap` is the outer wrapper the design notes call for when a
//! caller actually needs concurrent access instead of already serializing
//! it externally.

use std::alloc::{GlobalAlloc, Layout};
use std::ptr;

use spin::Mutex;

use crate::core::InitError;
use crate::heap::BuddyHeap;
use crate::reserve::{ProcessBreak, SbrkBreak};
use crate::stats::HeapStats;

pub struct LockedBuddyHeap<B: ProcessBreak + Send> {
  heap: Mutex<BuddyHeap<B>>,
}

impl<B: ProcessBreak + Send> LockedBuddyHeap<B> {
  pub fn try_new(backend: B) -> Result<Self, InitError> {
    Ok(LockedBuddyHeap { heap: Mutex::new(BuddyHeap::try_new(backend)?) })
  }

  pub fn alloc_bytes(&self, size: usize) -> Option<ptr::NonNull<u8>> {
    self.heap.lock().alloc_bytes(size)
  }

  /// # Safety
  ///
  /// Same precondition as [`BuddyHeap::dealloc_bytes`].
  pub unsafe fn dealloc_bytes(&self, ptr: ptr::NonNull<u8>) {
    unsafe { self.heap.lock().dealloc_bytes(ptr) };
  }

  pub fn stats(&self) -> HeapStats {
    self.heap.lock().stats()
  }
}

/// Convenience alias for installing this allocator as `#[global_allocator]`
/// against the real process heap via `sbrk`/`brk`.
pub type SbrkHeap = LockedBuddyHeap<SbrkBreak>;

impl SbrkHeap {
  /// # Panics
  ///
  /// Panics if the very first sixteen bytes of the process heap could not
  /// be reserved. A global allocator has no one to report failure to at
  /// this point, so this assumes initialization succeeds, the same way a
  /// small bump-pointer allocator built on the same `sbrk`/`brk` pair
  /// would.
  pub fn new() -> Self {
    Self::try_new(SbrkBreak).expect("failed to initialize the global buddy allocator")
  }
}

impl Default for SbrkHeap {
  fn default() -> Self {
    Self::new()
  }
}

unsafe impl<B: ProcessBreak + Send> GlobalAlloc for LockedBuddyHeap<B> {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    match self.heap.lock().alloc_layout(layout) {
      Some(ptr) => ptr.as_ptr(),
      None => ptr::null_mut(),
    }
  }

  unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
    if let Some(ptr) = ptr::NonNull::new(ptr) {
      unsafe { self.heap.lock().dealloc_bytes(ptr) };
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reserve::BufferBreak;

  #[test]
  fn interleaved_alloc_dealloc_through_the_lock() {
    let heap = LockedBuddyHeap::try_new(BufferBreak::new(1 << 16)).unwrap();

    let a = heap.alloc_bytes(16).unwrap();
    let b = heap.alloc_bytes(16).unwrap();
    unsafe { heap.dealloc_bytes(a) };
    let c = heap.alloc_bytes(16).unwrap();
    assert_eq!(a, c);
    unsafe {
      heap.dealloc_bytes(b);
      heap.dealloc_bytes(c);
    }
    assert_eq!(heap.stats().live_allocations, 0);
  }

  #[test]
  fn global_alloc_adapter_round_trips_a_layout() {
    let heap = LockedBuddyHeap::try_new(BufferBreak::new(1 << 16)).unwrap();
    let layout = Layout::from_size_align(64, 8).unwrap();

    unsafe {
      let ptr = GlobalAlloc::alloc(&heap, layout);
      assert!(!ptr.is_null());
      ptr.write_bytes(0xAB, layout.size());
      GlobalAlloc::dealloc(&heap, ptr, layout);
    }
    assert_eq!(heap.stats().live_allocations, 0);
  }

  #[test]
  fn global_alloc_rejects_overstrict_alignment_with_null() {
    let heap = LockedBuddyHeap::try_new(BufferBreak::new(1 << 16)).unwrap();
    let layout = Layout::from_size_align(64, 4096).unwrap();
    unsafe {
      assert!(GlobalAlloc::alloc(&heap, layout).is_null());
    }
  }
}
