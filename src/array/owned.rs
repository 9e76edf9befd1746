use core::fmt;
use core::mem;
use core::ptr::NonNull;
use core::slice;

use super::raw;

/// Error raised by [`Array`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// The buffer could not be (re)allocated. The array is unchanged.
    Alloc,
    /// An index or pop count exceeded the current length.
    OutOfBounds {
        /// The offending index or count.
        index: usize,
        /// The length at the time of the access.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::Alloc => write!(f, "buffer reallocation failed"),
            ArrayError::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl core::error::Error for ArrayError {}

/// A growable array owning a buffer of exactly `len` elements.
///
/// Elements are stored by value and the array never runs destructors,
/// hence the `Copy` bound. Failed reallocations leave the array in its
/// prior state and are reported through [`ArrayError`].
pub struct Array<T: Copy> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T: Copy> Array<T> {
    /// Creates a new, empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    /// Number of elements currently stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements (and thus no allocation).
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size in bytes of one stored element.
    pub const fn elem_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Appends a copy of `value`, growing the buffer by one element.
    ///
    /// On reallocation failure the array is unchanged and
    /// [`ArrayError::Alloc`] is returned.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        let slot = self.grow_one()?;
        unsafe { slot.write(value) };
        Ok(())
    }

    /// Appends a default-initialized element and returns it.
    ///
    /// The new slot is always initialized, never left as raw buffer
    /// contents. On reallocation failure the array is unchanged.
    pub fn push_default(&mut self) -> Result<&mut T, ArrayError>
    where
        T: Default,
    {
        let mut slot = self.grow_one()?;
        unsafe {
            slot.write(T::default());
            Ok(slot.as_mut())
        }
    }

    fn grow_one(&mut self) -> Result<NonNull<T>, ArrayError> {
        let new_ptr = unsafe { raw::resize_exact(self.ptr, self.len, self.len + 1)? };
        self.ptr = new_ptr;
        let slot = unsafe { new_ptr.add(self.len) };
        self.len += 1;
        Ok(slot)
    }

    /// Removes the last `count` elements, shrinking the buffer by exactly
    /// that much. Removing every element frees the buffer entirely.
    ///
    /// `pop(0)` is a no-op. A `count` greater than the current length is
    /// refused with [`ArrayError::OutOfBounds`]; a failed shrink
    /// reallocation leaves the array unchanged. Both report without
    /// modifying anything.
    pub fn pop(&mut self, count: usize) -> Result<(), ArrayError> {
        if count == 0 {
            return Ok(());
        }
        if count > self.len {
            return Err(ArrayError::OutOfBounds {
                index: count,
                len: self.len,
            });
        }

        let new_len = self.len - count;
        self.ptr = unsafe { raw::resize_exact(self.ptr, self.len, new_len)? };
        self.len = new_len;
        Ok(())
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(unsafe { self.ptr.add(index).as_ref() })
        } else {
            None
        }
    }

    /// Returns the element at `index` mutably, or `None` when out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(unsafe { self.ptr.add(index).as_mut() })
        } else {
            None
        }
    }

    /// Iterates over all elements in order, positions `0..len`.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// The whole buffer as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The whole buffer as a mutable slice, e.g. for in-place sorting.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Frees the buffer and resets the array to empty.
    pub fn clear(&mut self) {
        // Deallocation cannot fail; resize_exact only errors on the
        // allocating paths.
        if let Ok(ptr) = unsafe { raw::resize_exact(self.ptr, self.len, 0) } {
            self.ptr = ptr;
        }
        self.len = 0;
    }
}

impl<T: Copy> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Drop for Array<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Copy + Send> Send for Array<T> {}
unsafe impl<T: Copy + Sync> Sync for Array<T> {}
