use core::ptr::NonNull;

use super::traits::{Link, LinkWithPrev, List, Node, NodeWithData};

/// A node in a doubly linked list, owning its payload.
///
/// Embed this in the structure that needs list membership. The links point
/// at other `DoubleNode<T>` values directly, so the payload of a visited
/// node is reached through [`NodeWithData`] without any pointer
/// arithmetic on the enclosing structure.
pub struct DoubleNode<T> {
    next: Option<NonNull<Self>>,
    prev: Option<NonNull<Self>>,
    data: T,
}

impl<T> DoubleNode<T> {
    /// Creates a new, unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            next: None,
            prev: None,
            data,
        }
    }
}

impl<T: Default> Default for DoubleNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Link for DoubleNode<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self::Target>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>) {
        self.next = next;
    }
}

impl<T> LinkWithPrev for DoubleNode<T> {
    #[inline]
    fn prev(&self) -> Option<NonNull<Self::Target>> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<NonNull<Self::Target>>) {
        self.prev = prev;
    }
}

impl<T> Node for DoubleNode<T> {
    #[inline]
    fn append_to<L>(&mut self, list: &mut L)
    where
        L: List<Target = Self>,
    {
        let self_ptr = NonNull::from(&mut *self);
        self.set_next(list.next());
        if let Some(next) = self.next() {
            let next = unsafe { &mut *next.as_ptr() };
            next.set_prev(Some(self_ptr));
        }
        self.set_prev(list.prev());
        list.set_next(Some(self_ptr));
    }

    #[inline]
    unsafe fn detach<L>(&mut self, parent: Option<&mut L>)
    where
        L: Link<Target = Self>,
    {
        if let Some(parent) = parent {
            assert_eq!(
                parent.next(),
                Some(NonNull::from(&mut *self)),
                "Parent must be the one that contains this node"
            );

            parent.set_next(self.next());
            if let Some(next) = self.next() {
                let next = unsafe { &mut *next.as_ptr() };
                next.set_prev(self.prev());
            }
        } else {
            let prev = self
                .prev()
                .map(|n| unsafe { &mut *n.as_ptr() })
                .expect("Trying to detach an orphan node");
            unsafe { self.detach(Some(prev)) };
        }
    }
}

impl<T> NodeWithData for DoubleNode<T> {
    type Data = T;

    fn data(&self) -> &Self::Data {
        &self.data
    }

    fn data_mut(&mut self) -> &mut Self::Data {
        &mut self.data
    }
}

unsafe impl<T: Send> Send for DoubleNode<T> {}
unsafe impl<T: Sync> Sync for DoubleNode<T> {}
