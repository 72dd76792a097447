//! Intrusive circular doubly-linked list.
//!
//! The links for a free block are written directly into the first sixteen
//! bytes of the block's own memory, never into a side table. Every function
//! here is `unsafe` because it trusts the caller to pass a pointer to memory
//! that is actually reserved and not concurrently aliased.

use std::ptr;

/// Two pointers, `prev` and `next`, stored at the start of a free block.
///
/// An anchor is a `ListLink` that is never itself a block; `prev`/`next` on
/// an empty anchor both point back at the anchor, which lets every list
/// operation below run branch-free on the empty case.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ListLink {
  pub prev: *mut ListLink,
  pub next: *mut ListLink,
}

impl ListLink {
  pub const fn dangling() -> Self {
    ListLink { prev: ptr::null_mut(), next: ptr::null_mut() }
  }
}

/// Resets `anchor` to the empty circular list (`prev == next == anchor`).
pub unsafe fn list_init(anchor: *mut ListLink) {
  unsafe {
    (*anchor).prev = anchor;
    (*anchor).next = anchor;
  }
}

/// Inserts `entry` just before `anchor`, i.e. at the back of the list.
///
/// Assumes `entry` is not currently linked into any list; its `prev`/`next`
/// fields are overwritten unconditionally.
pub unsafe fn list_push_back(anchor: *mut ListLink, entry: *mut ListLink) {
  unsafe {
    let prev = (*anchor).prev;
    (*entry).prev = prev;
    (*entry).next = anchor;
    (*prev).next = entry;
    (*anchor).prev = entry;
  }
}

/// Unlinks `entry` from whichever list it currently belongs to.
///
/// The list's identity isn't needed: circularity means the neighbors' links
/// are enough to splice `entry` back out, even if it was the only element.
pub unsafe fn list_remove(entry: *mut ListLink) {
  unsafe {
    let prev = (*entry).prev;
    let next = (*entry).next;
    (*prev).next = next;
    (*next).prev = prev;
  }
}

/// Removes and returns the back of the list, or null if it is empty.
pub unsafe fn list_pop_back(anchor: *mut ListLink) -> *mut ListLink {
  unsafe {
    let back = (*anchor).prev;
    if back == anchor {
      return ptr::null_mut();
    }
    list_remove(back);
    back
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_list_is_self_referential() {
    let mut anchor = ListLink::dangling();
    let anchor_ptr = &mut anchor as *mut ListLink;
    unsafe {
      list_init(anchor_ptr);
      assert_eq!((*anchor_ptr).prev, anchor_ptr);
      assert_eq!((*anchor_ptr).next, anchor_ptr);
      assert!(list_pop_back(anchor_ptr).is_null());
    }
  }

  #[test]
  fn push_pop_is_lifo() {
    let mut anchor = ListLink::dangling();
    let anchor_ptr = &mut anchor as *mut ListLink;
    let mut a = ListLink::dangling();
    let mut b = ListLink::dangling();
    let mut c = ListLink::dangling();

    unsafe {
      list_init(anchor_ptr);
      list_push_back(anchor_ptr, &mut a);
      list_push_back(anchor_ptr, &mut b);
      list_push_back(anchor_ptr, &mut c);

      assert_eq!(list_pop_back(anchor_ptr), &mut c as *mut ListLink);
      assert_eq!(list_pop_back(anchor_ptr), &mut b as *mut ListLink);
      assert_eq!(list_pop_back(anchor_ptr), &mut a as *mut ListLink);
      assert!(list_pop_back(anchor_ptr).is_null());
    }
  }

  #[test]
  fn remove_from_middle_splices_neighbors() {
    let mut anchor = ListLink::dangling();
    let anchor_ptr = &mut anchor as *mut ListLink;
    let mut a = ListLink::dangling();
    let mut b = ListLink::dangling();
    let mut c = ListLink::dangling();

    unsafe {
      list_init(anchor_ptr);
      list_push_back(anchor_ptr, &mut a);
      list_push_back(anchor_ptr, &mut b);
      list_push_back(anchor_ptr, &mut c);

      list_remove(&mut b as *mut ListLink);

      assert_eq!(list_pop_back(anchor_ptr), &mut c as *mut ListLink);
      assert_eq!(list_pop_back(anchor_ptr), &mut a as *mut ListLink);
      assert!(list_pop_back(anchor_ptr).is_null());
    }
  }
}
