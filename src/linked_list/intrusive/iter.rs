use core::ptr::NonNull;

use super::traits::{LinkWithPrev, List, Node};

/// An iterator over a linked list, walking front to back.
pub struct LinkedListIter<'a, T: Node, L: List> {
    _list: &'a L,
    current: Option<NonNull<T>>,
}

impl<'a, T, L> LinkedListIter<'a, T, L>
where
    T: Node,
    L: List<Target = T>,
{
    /// Creates a new iterator over the given list.
    ///
    /// An empty list produces an iterator that yields nothing.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the iterator is alive.
    pub unsafe fn new(list: &'a L) -> Self {
        Self {
            current: list.head(),
            _list: list,
        }
    }
}

impl<'a, T, L> Iterator for LinkedListIter<'a, T, L>
where
    T: Node<Target = T>,
    L: List<Target = T>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

/// An iterator over a linked list, walking back to front.
///
/// Visits the same nodes as [`LinkedListIter`], in the opposite order.
pub struct LinkedListRevIter<'a, T: Node, L: List> {
    _list: &'a L,
    current: Option<NonNull<T>>,
}

impl<'a, T, L> LinkedListRevIter<'a, T, L>
where
    T: Node + LinkWithPrev,
    L: List<Target = T>,
{
    /// Creates a new reverse iterator over the given list.
    ///
    /// An empty list produces an iterator that yields nothing.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the iterator is alive.
    pub unsafe fn new(list: &'a L) -> Self {
        Self {
            current: list.tail(),
            _list: list,
        }
    }
}

impl<'a, T, L> Iterator for LinkedListRevIter<'a, T, L>
where
    T: Node<Target = T> + LinkWithPrev,
    L: List<Target = T>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().prev() };
        })
    }
}

unsafe impl<'a, T, L> Send for LinkedListIter<'a, T, L>
where
    T: Node + Send,
    L: List<Target = T>,
{
}

unsafe impl<'a, T, L> Sync for LinkedListIter<'a, T, L>
where
    T: Node + Sync,
    L: List<Target = T>,
{
}

unsafe impl<'a, T, L> Send for LinkedListRevIter<'a, T, L>
where
    T: Node + LinkWithPrev + Send,
    L: List<Target = T>,
{
}

unsafe impl<'a, T, L> Sync for LinkedListRevIter<'a, T, L>
where
    T: Node + LinkWithPrev + Sync,
    L: List<Target = T>,
{
}
