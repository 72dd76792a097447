//! # buddyalloc - A Power-of-Two Buddy Memory Allocator
//!
//! This crate provides a **buddy allocator**: a heap manager that serves
//! allocation and release requests from a single contiguous address range,
//! using power-of-two size classes ("buckets") with recursive splitting and
//! coalescing of buddy blocks. Both `allocate` and `release` run in time
//! proportional to the logarithm of the heap size.
//!
//! ## Overview
//!
//! The managed region is conceptually an implicit binary tree, never
//! materialized as linked nodes: node `0` is the whole region, and each
//! level down halves the size class.
//!
//! ```text
//!   bucket 0 (root, MAX_BLOCK bytes)
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                         entire region                        │
//!   └──────────────────────────────────────────────────────────────┘
//!
//!   bucket 1, after one split
//!   ┌───────────────────────────────┬──────────────────────────────┐
//!   │          left child           │          right child          │
//!   └───────────────────────────────┴──────────────────────────────┘
//!
//!   bucket 2, after splitting the left child again
//!   ┌────────────────┬──────────────┬──────────────────────────────┐
//!   │   grandchild    │  grandchild  │          right child          │
//!   └────────────────┴──────────────┴──────────────────────────────┘
//! ```
//!
//! A node's state (`UNUSED`, `SPLIT`, or `USED`) is never stored directly;
//! only whether a node is `SPLIT` is recorded, as a single bit per internal
//! node, because `UNUSED` vs. `USED` is always recoverable from context
//! (free-list membership and which operation is running).
//!
//! ## Crate Structure
//!
//! ```text
//!   buddyalloc
//!   ├── list     - intrusive circular free lists (links live in free blocks)
//!   ├── index    - address <-> tree-node-index arithmetic, bucket sizing
//!   ├── reserve  - lazy backing-memory reservation (ProcessBreak, SbrkBreak)
//!   ├── core     - BuddyCore: the allocate/release protocol itself
//!   ├── stats    - read-only occupancy snapshot
//!   ├── heap     - BuddyHeap: Option/NonNull/Layout-flavored façade
//!   └── locked   - LockedBuddyHeap: spin::Mutex wrapper + GlobalAlloc
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use buddyalloc::{BuddyHeap, SbrkBreak};
//!
//! let mut heap = BuddyHeap::try_new(SbrkBreak).expect("failed to reserve initial memory");
//!
//! let ptr = heap.alloc_bytes(64).expect("allocation failed");
//! unsafe {
//!   ptr.as_ptr().write_bytes(0, 64);
//!   heap.dealloc_bytes(ptr);
//! }
//! ```
//!
//! ## How It Works
//!
//! Every live allocation is preceded by an 8-byte header storing the
//! caller-requested size:
//!
//! ```text
//!   Single Allocation:
//!   ┌────────────────┬──────────────────────────────────────────────┐
//!   │  8-byte header  │                 user data                    │
//!   │  (request size) │          (request bytes usable)              │
//!   └────────────────┴──────────────────────────────────────────────┘
//!                     ▲
//!                     └── Pointer returned to user
//! ```
//!
//! `release` reads that header to recover the size class, then walks up the
//! implicit tree, merging with any buddy that is also free, until it either
//! reaches the root or finds a buddy that's still in use.
//!
//! ## Features
//!
//! - **O(log N) allocate and release**, where N is `MAX_BLOCK / MIN_BLOCK`.
//! - **One bit of metadata per internal tree node** — no per-block side table.
//! - **Lazy backing memory**: the 2 GiB region is reserved incrementally, only
//!   as far as any allocation has actually touched.
//! - **Pluggable backend**: the core is generic over [`ProcessBreak`],
//!   so it can run against real `sbrk`/`brk` or an in-memory test double.
//!
//! ## Limitations
//!
//! - **Single-threaded core**: `BuddyCore` and `BuddyHeap` require external
//!   synchronization; use [`LockedBuddyHeap`] if you need that built in.
//! - **No alignment stronger than 8 bytes**: `alloc_layout` rejects anything
//!   stricter (the core never reasoned about extra alignment slack).
//! - **Fixed 2 GiB region**: the managed range's size is a compile-time
//!   constant, not configurable per instance.
//!
//! ## Safety
//!
//! This crate is inherently unsafe: it casts raw addresses to free-list
//! links and back, and `release`/`dealloc_bytes` trust their precondition
//! exactly the way `free` does. Invalid pointers, double-frees, and use
//! after free are all undefined behavior by design — this is a low-level
//! allocator, not a validated API.

mod core;
mod heap;
mod index;
mod list;
mod locked;
mod reserve;
mod stats;

pub use crate::core::{BuddyCore, InitError};
pub use crate::heap::{BuddyHeap, NATURAL_ALIGN};
pub use crate::index::{BUCKETS, HEADER, MAX_BLOCK, MIN_BLOCK};
pub use crate::locked::{LockedBuddyHeap, SbrkHeap};
pub use crate::reserve::{BufferBreak, ProcessBreak, SbrkBreak};
pub use crate::stats::HeapStats;
