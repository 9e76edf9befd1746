//! Fallible exact-size reallocation for the array's backing buffer.
//!
//! The buffer is always sized to exactly the element count, so every grow
//! and shrink goes through [`resize_exact`]. Failures are reported to the
//! caller; the old buffer is always left valid when a reallocation fails.

use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc, realloc};

use super::owned::ArrayError;

#[cfg(test)]
std::thread_local! {
    static FAIL_NEXT_ALLOC: core::cell::Cell<bool> = const { core::cell::Cell::new(false) };
}

/// Makes the next (re)allocation on this thread report failure.
#[cfg(test)]
pub(crate) fn fail_next_alloc() {
    FAIL_NEXT_ALLOC.with(|flag| flag.set(true));
}

#[cfg(test)]
fn take_injected_failure() -> bool {
    FAIL_NEXT_ALLOC.with(|flag| flag.replace(false))
}

#[cfg(not(test))]
fn take_injected_failure() -> bool {
    false
}

/// Resizes a buffer of exactly `old_len` `T`s to exactly `new_len`.
///
/// Returns the new buffer pointer; on failure the buffer at `ptr` is
/// untouched and still holds `old_len` elements. A zero-length buffer is
/// no allocation at all and is represented by a dangling pointer, as is
/// any buffer of zero-sized elements.
///
/// # Safety
///
/// `ptr` must be the pointer last returned by this function for the same
/// buffer (or dangling when `old_len == 0` or `T` is zero-sized), and
/// `old_len` must be that buffer's exact element count.
pub(crate) unsafe fn resize_exact<T>(
    ptr: NonNull<T>,
    old_len: usize,
    new_len: usize,
) -> Result<NonNull<T>, ArrayError> {
    if mem::size_of::<T>() == 0 || old_len == new_len {
        return Ok(ptr);
    }

    let new_layout = Layout::array::<T>(new_len).map_err(|_| ArrayError::Alloc)?;

    if new_len == 0 {
        let old_layout = Layout::array::<T>(old_len).map_err(|_| ArrayError::Alloc)?;
        unsafe { dealloc(ptr.as_ptr().cast(), old_layout) };
        return Ok(NonNull::dangling());
    }

    if take_injected_failure() {
        return Err(ArrayError::Alloc);
    }

    let new_ptr = if old_len == 0 {
        unsafe { alloc(new_layout) }
    } else {
        let old_layout = Layout::array::<T>(old_len).map_err(|_| ArrayError::Alloc)?;
        unsafe { realloc(ptr.as_ptr().cast(), old_layout, new_layout.size()) }
    };

    NonNull::new(new_ptr.cast()).ok_or(ArrayError::Alloc)
}
