//! # Generic Partition Sort
//!
//! An in-place recursive quicksort over slices, driven by a three-way
//! comparator. One generic function serves every element type.
//!
//! The pivot is the middle element of each partition; two indices converge
//! from the ends, swapping elements that sit on the wrong side, and the
//! two resulting partitions are sorted recursively. A partition of fewer
//! than two elements is the base case.
//!
//! ## Properties
//!
//! - Average `O(n log n)`; worst case `O(n²)` on inputs that repeatedly
//!   defeat the middle-element pivot. That is inherent to this pivot
//!   strategy and documented rather than papered over.
//! - Not stable: elements comparing equal may be reordered.
//! - Idempotent on sorted input (a sorted slice stays sorted).

use core::cmp::Ordering;

/// Sorts `v` in place in ascending order.
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// Sorts `v` in place by the given three-way comparator.
///
/// The comparator must implement a total order; otherwise the resulting
/// order is unspecified (all elements still remain in the slice).
pub fn quick_sort_by<T, F>(v: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_rec(v, &mut cmp);
}

fn sort_rec<T, F>(v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = v.len();
    if n < 2 {
        return;
    }

    // The pivot stays in the slice; track its slot through swaps so every
    // comparison sees the original pivot value.
    let mut p = n / 2;
    let mut l: isize = 0;
    let mut r: isize = n as isize - 1;

    while l <= r {
        if cmp(&v[l as usize], &v[p]) == Ordering::Less {
            l += 1;
            continue;
        }
        if cmp(&v[r as usize], &v[p]) == Ordering::Greater {
            r -= 1;
            continue;
        }

        v.swap(l as usize, r as usize);
        if p == l as usize {
            p = r as usize;
        } else if p == r as usize {
            p = l as usize;
        }
        l += 1;
        r -= 1;
    }

    sort_rec(&mut v[..(r + 1) as usize], cmp);
    sort_rec(&mut v[l as usize..], cmp);
}
