//! Size classes and the address ⇄ node-index arithmetic for the implicit
//! binary tree. Bucket `0` is the largest size class; bucket `BUCKETS - 1`
//! is the smallest.

/// `log2` of the smallest block size. Blocks must be at least large enough
/// to hold a [`crate::list::ListLink`] (two pointers).
pub const MIN_LOG2: u32 = 4;
/// `log2` of the largest block size, i.e. the size of the whole region.
pub const MAX_LOG2: u32 = 31;
/// Smallest allocatable block, in bytes.
pub const MIN_BLOCK: usize = 1 << MIN_LOG2;
/// Size of the managed region, in bytes. Also the largest possible block.
pub const MAX_BLOCK: usize = 1 << MAX_LOG2;
/// Number of size classes, one per power of two from [`MIN_BLOCK`] to [`MAX_BLOCK`].
pub const BUCKETS: usize = (MAX_LOG2 - MIN_LOG2 + 1) as usize;
/// Bytes of header prepended to every live allocation.
pub const HEADER: usize = 8;
/// Length in bytes of the split-bit array: one bit per internal tree node.
pub const SPLIT_BITS_LEN: usize = (1usize << (BUCKETS - 1)) / 8;

/// Size in bytes of blocks belonging to `bucket`.
#[inline]
pub const fn block_size(bucket: usize) -> usize {
  1usize << (MAX_LOG2 as usize - bucket)
}

/// Address of the block represented by node `i` in `bucket`, relative to `base`.
#[inline]
pub fn ptr_of(base: *mut u8, i: usize, bucket: usize) -> *mut u8 {
  let offset = (i - (1 << bucket) + 1) << (MAX_LOG2 as usize - bucket);
  base.wrapping_add(offset)
}

/// Node index representing the block at `ptr` within `bucket`.
#[inline]
pub fn node_of(base: *mut u8, ptr: *mut u8, bucket: usize) -> usize {
  let offset = (ptr as usize) - (base as usize);
  (offset >> (MAX_LOG2 as usize - bucket)) + (1 << bucket) - 1
}

/// Parent of node `i`.
#[inline]
pub const fn parent_of(i: usize) -> usize {
  (i - 1) / 2
}

/// Sibling (buddy) of node `i`.
#[inline]
pub const fn sibling_of(i: usize) -> usize {
  ((i - 1) ^ 1) + 1
}

/// The largest bucket whose block size is still `>= request`, i.e. the
/// smallest power-of-two size class that fits `request` bytes.
pub fn bucket_for(request: usize) -> usize {
  let mut bucket = BUCKETS - 1;
  let mut size = MIN_BLOCK;

  while size < request {
    bucket -= 1;
    size *= 2;
  }

  bucket
}
