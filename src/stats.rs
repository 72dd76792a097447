//! Read-only occupancy diagnostics. Not fragmentation reporting — just a
//! snapshot of what the core already tracks, computed with no new invariants.

/// A snapshot of a [`crate::core::BuddyCore`]'s occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapStats {
  /// Number of allocations currently outstanding (not yet released).
  pub live_allocations: usize,
  /// Bytes of the managed region ever committed from the backend.
  pub bytes_reserved: usize,
  /// Start address of the managed region.
  pub region_base: *mut u8,
  /// One past the last address of the managed region.
  pub region_limit: *mut u8,
}
