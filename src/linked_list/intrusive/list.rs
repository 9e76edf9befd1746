use core::ptr::NonNull;

use super::traits::{Link, LinkWithPrev, List, Node};

/// A generic intrusive linked list.
///
/// The list plays the role of the sentinel: it is the predecessor of the
/// head node and the successor of the tail node, so nodes at either end
/// simply carry `None` links. It never owns or allocates nodes.
#[derive(Debug)]
pub struct LinkedList<T: Node> {
    head: Option<NonNull<T>>,
    tail: Option<NonNull<T>>,
    count: usize,
}

impl<T> LinkedList<T>
where
    T: Node,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            count: 0,
        }
    }
}

impl<T> Link for LinkedList<T>
where
    T: Node,
{
    type Target = T;

    fn next(&self) -> Option<NonNull<T>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<T>>) {
        self.head = next;
    }
}

impl<T> LinkWithPrev for LinkedList<T>
where
    T: Node,
{
    /// Get the previous pointer in the linked list.
    /// This implementation is for treating LinkedList as a `Link` to
    /// simplify the link operations. So it will always return `None`
    /// since it is not a real link.
    fn prev(&self) -> Option<NonNull<T>> {
        None
    }

    /// Set the previous pointer in the linked list.
    /// This implementation is for treating LinkedList as a `Link` to
    /// simplify the link operations. So it will not do anything.
    fn set_prev(&mut self, _parent: Option<NonNull<T>>) {}
}

impl<T> List for LinkedList<T>
where
    T: Node<Target = T> + LinkWithPrev,
{
    fn head(&self) -> Option<NonNull<T>> {
        self.next()
    }

    fn set_head(&mut self, head: Option<NonNull<T>>) {
        self.set_next(head);
    }

    fn tail(&self) -> Option<NonNull<T>> {
        self.tail
    }

    fn set_tail(&mut self, tail: Option<NonNull<T>>) {
        self.tail = tail;
    }

    fn push(&mut self, node: NonNull<T>) {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            node_ref.append_to(self);
            if self.tail.is_none() {
                self.tail = Some(node);
            }
            self.count += 1;
        }
    }

    fn pop(&mut self) -> Option<NonNull<T>> {
        self.head.inspect(|head| {
            unsafe {
                let head_ref = &mut *head.as_ptr();
                head_ref.detach(Some(self));
                if self.tail == Some(*head) {
                    self.tail = None;
                }
                self.count -= 1;
            }
        })
    }

    fn remove(&mut self, node: NonNull<T>) -> Option<NonNull<T>> {
        unsafe {
            let mut prev: Option<NonNull<T>> = None;
            for current in self.iter() {
                if current == node {
                    let node_ptr = &mut *current.as_ptr();
                    if let Some(prev) = prev {
                        node_ptr.detach(Some(&mut *prev.as_ptr()));
                    } else {
                        node_ptr.detach(Some(self));
                    }
                    if self.tail == Some(current) {
                        // The detached node's prev is stale but still
                        // names its old predecessor, the new tail.
                        self.tail = node_ptr.prev();
                    }
                    self.count -= 1;
                    return Some(current);
                }
                prev = Some(current);
            }
            None
        }
    }

    unsafe fn quick_remove(
        &mut self,
        node: NonNull<T>,
        parent: Option<NonNull<T>>,
    ) -> Option<NonNull<T>> {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            if let Some(parent) = parent {
                node_ref.detach(Some(&mut *parent.as_ptr()));
            } else if self.head == Some(node) {
                node_ref.detach(Some(self));
            } else {
                node_ref.detach::<T>(None);
            }
            if self.tail == Some(node) {
                self.tail = node_ref.prev();
            }
            self.count -= 1;
            Some(node)
        }
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn count(&self) -> usize {
        self.count
    }
}

impl<T> Default for LinkedList<T>
where
    T: Node,
{
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            count: 0,
        }
    }
}

unsafe impl<T: Node + Send> Send for LinkedList<T> {}
unsafe impl<T: Node + Sync> Sync for LinkedList<T> {}
