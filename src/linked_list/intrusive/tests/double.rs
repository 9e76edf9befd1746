extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::linked_list::intrusive::{
    double::DoubleNode,
    list::LinkedList,
    traits::{Link, LinkWithPrev, List, NodeWithData},
};

#[test]
fn test_double_list_push_pop() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    assert!(list.is_empty());

    let mut node1 = DoubleNode::new(1);
    let mut node2 = DoubleNode::new(2);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));

    assert_eq!(list.count(), 2);
    assert!(!list.is_empty());

    unsafe {
        let popped = list.pop().unwrap();
        assert_eq!(*popped.as_ref().data(), 2);
        assert!(popped.as_ref().prev().is_none());
        assert_eq!(list.count(), 1);

        let head = list.head().unwrap();
        assert!(head.as_ref().prev().is_none());

        let popped = list.pop().unwrap();
        assert_eq!(*popped.as_ref().data(), 1);
        assert_eq!(list.count(), 0);
    }

    assert!(list.is_empty());
    assert!(list.tail().is_none());
    assert!(list.pop().is_none());
}

#[test]
fn test_double_list_iter() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    let mut node1 = DoubleNode::new(1);
    let mut node2 = DoubleNode::new(2);
    let mut node3 = DoubleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3));

    let mut values = vec![];
    unsafe {
        for node in list.iter() {
            values.push(*node.as_ref().data());
        }
    }
    assert_eq!(values, vec![3, 2, 1]);

    // A fresh traversal starts over from the head.
    let mut again = vec![];
    unsafe {
        for node in list.iter() {
            again.push(*node.as_ref().data());
        }
    }
    assert_eq!(again, values);
}

#[test]
fn test_double_list_iter_rev() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    let mut node1 = DoubleNode::new(1);
    let mut node2 = DoubleNode::new(2);
    let mut node3 = DoubleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3));

    let forward: Vec<i32> = unsafe { list.iter().map(|n| *n.as_ref().data()).collect() };
    let backward: Vec<i32> = unsafe { list.iter_rev().map(|n| *n.as_ref().data()).collect() };

    let mut reversed = forward.clone();
    reversed.reverse();
    assert_eq!(backward, reversed);
}

#[test]
fn test_double_list_iter_empty() {
    let list = LinkedList::<DoubleNode<i32>>::new();
    unsafe {
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.iter_rev().count(), 0);
    }
}

#[test]
fn test_double_list_remove() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    let mut node1 = DoubleNode::new(1);
    let mut node2 = DoubleNode::new(2);
    let mut node3 = DoubleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3)); // list is 3 -> 2 -> 1

    // Remove middle
    unsafe {
        let removed = list.remove(NonNull::from(&mut node2));
        assert!(removed.is_some());
        assert_eq!(*removed.unwrap().as_ref().data(), 2);

        // Check links
        let head = list.head().unwrap().as_ref();
        let tail = head.next().unwrap().as_ref();
        assert_eq!(*head.data(), 3);
        assert_eq!(*tail.data(), 1);
        assert_eq!(head.next().unwrap().as_ptr(), tail as *const _ as *mut _);
        assert_eq!(tail.prev().unwrap().as_ptr(), head as *const _ as *mut _);
        assert_eq!(list.tail().unwrap().as_ptr(), tail as *const _ as *mut _);
    }
    assert_eq!(list.count(), 2);

    // Remove head
    unsafe {
        let removed = list.remove(NonNull::from(&mut node3));
        assert!(removed.is_some());
        let new_head = list.head().unwrap().as_ref();
        assert_eq!(*new_head.data(), 1);
        assert!(new_head.prev().is_none());
    }
    assert_eq!(list.count(), 1);

    // Remove tail
    let removed = list.remove(NonNull::from(&mut node1));
    assert!(removed.is_some());
    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
}

#[test]
fn test_double_list_remove_tail_updates_tail() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    let mut node1 = DoubleNode::new(1);
    let mut node2 = DoubleNode::new(2);
    let mut node3 = DoubleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3)); // list is 3 -> 2 -> 1, tail is 1

    unsafe {
        let removed = list.remove(NonNull::from(&mut node1));
        assert!(removed.is_some());
        assert_eq!(*list.tail().unwrap().as_ref().data(), 2);

        let backward: Vec<i32> = list.iter_rev().map(|n| *n.as_ref().data()).collect();
        assert_eq!(backward, vec![2, 3]);
    }
}

#[test]
fn test_double_list_remove_twice_is_checked() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    let mut node1 = DoubleNode::new(1);
    let mut node2 = DoubleNode::new(2);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));

    assert!(list.remove(NonNull::from(&mut node1)).is_some());
    // Second removal finds nothing and leaves the list intact.
    assert!(list.remove(NonNull::from(&mut node1)).is_none());
    assert_eq!(list.count(), 1);

    // A node that was never a member is also refused.
    let mut stranger = DoubleNode::new(9);
    assert!(list.remove(NonNull::from(&mut stranger)).is_none());
    assert_eq!(list.count(), 1);
}

#[test]
fn test_double_list_quick_remove() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    let mut node1 = DoubleNode::new(1);
    let mut node2 = DoubleNode::new(2);
    let mut node3 = DoubleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3)); // list is 3 -> 2 -> 1

    // Quick remove middle
    unsafe {
        let removed = list.quick_remove(NonNull::from(&mut node2), Some(NonNull::from(&mut node3)));
        assert!(removed.is_some());

        // Check links
        let head = list.head().unwrap().as_ref();
        let tail = head.next().unwrap().as_ref();
        assert_eq!(head.next().unwrap().as_ptr(), tail as *const _ as *mut _);
        assert_eq!(tail.prev().unwrap().as_ptr(), head as *const _ as *mut _);
    }
    assert_eq!(list.count(), 2);
}

// The mutual invariant: every reachable node's next points back to it via
// prev, with the list itself standing in at the boundaries.
fn assert_links_consistent(list: &LinkedList<DoubleNode<i32>>) {
    unsafe {
        let mut prev: Option<NonNull<DoubleNode<i32>>> = None;
        for node in list.iter() {
            assert_eq!(node.as_ref().prev(), prev);
            if let Some(prev) = prev {
                assert_eq!(prev.as_ref().next(), Some(node));
            }
            prev = Some(node);
        }
        assert_eq!(list.tail(), prev);
        if let Some(last) = prev {
            assert!(last.as_ref().next().is_none());
        }
    }
}

#[test]
fn test_double_list_invariant_across_operations() {
    let mut list = LinkedList::<DoubleNode<i32>>::new();
    let mut nodes: Vec<DoubleNode<i32>> = (0..8).map(DoubleNode::new).collect();

    for node in nodes.iter_mut() {
        list.push(NonNull::from(node));
        assert_links_consistent(&list);
    }

    // Drop members in a mixed order, checking after every splice.
    for idx in [3usize, 0, 7, 4, 1] {
        assert!(list.remove(NonNull::from(&mut nodes[idx])).is_some());
        assert_links_consistent(&list);
    }
    while list.pop().is_some() {
        assert_links_consistent(&list);
    }
    assert!(list.is_empty());
}
