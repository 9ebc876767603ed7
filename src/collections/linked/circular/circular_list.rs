use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{Iter, NodeRef};
use crate::collections::linked::{Length, ONE, RingRemovalError, TooShort, ValueNotFound};
use crate::util::fmt::DebugEntries;

/// A ring of singly-linked nodes, entered through a designated head. Following the links from any
/// node eventually leads back to the head.
///
/// A CircularList always holds at least one element: it is constructed from an initial value and
/// refuses to remove its last remaining node.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head` | `O(1)` |
/// | `insert_next_to_head` | `O(1)` |
/// | `insert_before_head` | `O(n)` |
/// | `insert_next_to_last` | `O(n)` |
/// | `insert_before_last` | `O(n)` |
/// | `insert_next_to_value` | `O(n)` |
/// | `insert_before_value` | `O(n)` |
/// | `delete_value` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// Only the head is tracked, so anything relative to the end of the ring has to walk all the way
/// around to find the last node.
pub struct CircularList<T> {
    pub(crate) len: Length,
    pub(crate) head: NodeRef<T>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> CircularList<T> {
    /// Creates a new CircularList holding only `value`, in a node that links to itself.
    pub fn new(value: T) -> CircularList<T> {
        CircularList {
            len: ONE,
            head: NodeRef::new_ring(value),
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the ring. This is never zero.
    pub const fn len(&self) -> usize {
        self.len.get()
    }

    /// Returns a reference to the element at the head of the ring.
    pub fn head(&self) -> &T {
        self.head.value()
    }

    /// Returns a mutable reference to the element at the head of the ring.
    pub fn head_mut(&mut self) -> &mut T {
        self.head.value_mut()
    }

    /// Inserts `value` directly after the head, so that it becomes the second element.
    pub fn insert_next_to_head(&mut self, value: T) {
        self.splice_after(self.head, value);
    }

    /// Inserts `value` between the last node and the head. The head doesn't move, so the new value
    /// becomes the last element of the ring.
    ///
    /// This leaves the ring in exactly the same state as [`insert_next_to_last`], because the
    /// position before the head and the position after the last node are one and the same.
    ///
    /// [`insert_next_to_last`]: CircularList::insert_next_to_last
    pub fn insert_before_head(&mut self, value: T) {
        self.insert_at_boundary(value);
    }

    /// Inserts `value` after the last node, closing the ring back to the head through the new node.
    /// Equivalent to [`insert_before_head`](CircularList::insert_before_head).
    pub fn insert_next_to_last(&mut self, value: T) {
        self.insert_at_boundary(value);
    }

    /// Inserts `value` between the second-to-last and last nodes, so that it becomes the
    /// second-to-last element.
    ///
    /// # Errors
    /// Returns [`TooShort`] if the ring holds a single node, because there is no second-to-last
    /// node to insert after.
    pub fn insert_before_last(&mut self, value: T) -> Result<(), TooShort> {
        let len = self.len.get();
        if len < 2 {
            return Err(TooShort { required: 2, len });
        }

        let second_last = self.seek(len - 2);
        self.splice_after(second_last, value);
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> CircularList<T> {
    /// Inserts `value` directly after the first node (starting from the head) that holds `target`.
    ///
    /// # Errors
    /// Returns [`ValueNotFound`] and leaves the ring unchanged if no node holds `target`.
    pub fn insert_next_to_value(&mut self, value: T, target: &T) -> Result<(), ValueNotFound> {
        let node = self.find(target).ok_or(ValueNotFound)?;
        self.splice_after(node, value);
        Ok(())
    }

    /// Inserts `value` directly before a node that holds `target`. The search starts from the node
    /// after the head and checks the head last. If the match is the head, the new value is placed
    /// between the last node and the head, and the head doesn't move.
    ///
    /// # Errors
    /// Returns [`ValueNotFound`] and leaves the ring unchanged if no node holds `target`.
    pub fn insert_before_value(&mut self, value: T, target: &T) -> Result<(), ValueNotFound> {
        let prev = self.find_predecessor(target).ok_or(ValueNotFound)?;
        self.splice_after(prev, value);
        Ok(())
    }

    /// Removes a node holding `target` and returns its value. Nodes are searched in the same order
    /// as [`insert_before_value`](CircularList::insert_before_value), with the head checked last.
    /// If the head is removed, its successor becomes the new head.
    ///
    /// # Errors
    /// Leaves the ring unchanged and returns:
    /// - [`RingRemovalError::ValueNotFound`] if no node holds `target`.
    /// - [`RingRemovalError::TooShort`] if `target` is held by the only node of the ring.
    pub fn delete_value(&mut self, target: &T) -> Result<T, RingRemovalError> {
        let prev = self.find_predecessor(target).ok_or(ValueNotFound)?;
        self.len = self.len.checked_sub(1).ok_or(TooShort { required: 2, len: 1 })?;

        let node = prev.next();
        *prev.next_mut() = node.next();
        if node == self.head {
            self.head = node.next();
        }

        // SAFETY: The node has just been unlinked from its only predecessor, so nothing in the
        // ring refers to it any longer.
        Ok(unsafe { node.take_node() }.value)
    }

    /// Returns true if any element of the ring is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|i| i == value)
    }
}

impl<T> CircularList<T> {
    /// Steps forward `count` nodes from the head, wrapping around the ring if needed.
    pub(crate) fn seek(&self, count: usize) -> NodeRef<T> {
        let mut node = self.head;
        for _ in 0..count {
            node = node.next();
        }
        node
    }

    /// Returns the last node, which is the node that links back to the head.
    pub(crate) fn last(&self) -> NodeRef<T> {
        let mut node = self.head;
        while node.next() != self.head {
            node = node.next();
        }
        node
    }

    fn insert_at_boundary(&mut self, value: T) {
        let last = self.last();
        self.splice_after(last, value);
    }

    /// Links a new node holding `value` directly after `node`, returning the new node.
    pub(crate) fn splice_after(&mut self, node: NodeRef<T>, value: T) -> NodeRef<T> {
        self.len = self.len.increment();

        let new_node = NodeRef::new_before(value, node.next());
        *node.next_mut() = new_node;
        new_node
    }

    #[cfg(test)]
    pub(crate) fn verify_ring(&self) {
        let len = self.len.get();
        let mut node = self.head;
        for step in 1..=len {
            node = node.next();
            if step < len {
                assert!(node != self.head, "Ring closed after {step} steps, expected {len}.");
            }
        }
        assert!(node == self.head, "Ring didn't close after {len} steps.");
    }
}

impl<T: PartialEq> CircularList<T> {
    /// Finds the first node holding `target`, checking the head first. Bounded to one lap.
    fn find(&self, target: &T) -> Option<NodeRef<T>> {
        let mut node = self.head;
        for _ in 0..self.len.get() {
            if node.value() == target {
                return Some(node);
            }
            node = node.next();
        }
        None
    }

    /// Finds the first node whose successor holds `target`, checking the head's successor first
    /// and the head itself last. Bounded to one lap.
    fn find_predecessor(&self, target: &T) -> Option<NodeRef<T>> {
        let mut node = self.head;
        for _ in 0..self.len.get() {
            if node.next().value() == target {
                return Some(node);
            }
            node = node.next();
        }
        None
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        let mut list = CircularList::new(self.head().clone());
        let mut last = list.head;
        for value in self.iter().skip(1) {
            last = list.splice_after(last, value.clone());
        }
        list
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        let mut node = self.head;
        for _ in 0..self.len.get() {
            let next = node.next();
            // SAFETY: Each of the len nodes in the ring is visited exactly once, and the list
            // can't be used again after being dropped.
            drop(unsafe { node.take_node() });
            node = next;
        }
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

/// Writes every element in ring order, starting from the head, and then the head once more to show
/// that the ring closes on itself: `1 -> 3 -> 2 -> 1`.
impl<T: Display> Display for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "{}", self.head())
    }
}
