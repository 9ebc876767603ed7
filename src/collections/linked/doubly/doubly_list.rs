use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use derive_more::IsVariant;

use super::{Iter, Node, NodeRef};
use crate::collections::linked::{EmptyList, Length, ONE, ValueNotFound};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;

/// A list with links in both directions. Unlike [`CircularList`](super::super::CircularList), the
/// chain has two ends: the head has no previous node and the tail has no next node.
///
/// A DoublyList is constructed from an initial value, but can become empty by deleting every
/// value. Inserting before the head of an empty list starts it over again.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head` | `O(1)` |
/// | `insert_next_to_head` | `O(1)` |
/// | `insert_before_head` | `O(1)` |
/// | `insert_after_value` | `O(n)` |
/// | `delete_value` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct DoublyList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
}

impl<T> DoublyList<T> {
    /// Creates a new DoublyList holding only `value`.
    pub fn new(value: T) -> DoublyList<T> {
        DoublyList {
            state: ListState::single(value),
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if every value has been deleted from the DoublyList.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn head(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn head_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Inserts `value` directly after the head, so that it becomes the second element.
    ///
    /// # Errors
    /// Returns [`EmptyList`] if the list has no head to insert after.
    pub fn insert_next_to_head(&mut self, value: T) -> Result<(), EmptyList> {
        match &mut self.state {
            Empty => Err(EmptyList),
            Full(contents) => {
                let head = contents.head;
                contents.splice_after(head, value);
                Ok(())
            },
        }
    }

    /// Inserts `value` as the new head of the list.
    pub fn insert_before_head(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyList<T> {
    /// Inserts `value` directly after the first node (starting from the head) that holds `target`.
    ///
    /// # Errors
    /// Returns [`ValueNotFound`] and leaves the list unchanged if no node holds `target`.
    pub fn insert_after_value(&mut self, value: T, target: &T) -> Result<(), ValueNotFound> {
        match &mut self.state {
            Empty => Err(ValueNotFound),
            Full(contents) => {
                let node = contents.find(target).ok_or(ValueNotFound)?;
                contents.splice_after(node, value);
                Ok(())
            },
        }
    }

    /// Removes the first node (starting from the head) that holds `target` and returns its value.
    /// If the head is removed, its successor becomes the new head.
    ///
    /// # Errors
    /// Returns [`ValueNotFound`] and leaves the list unchanged if no node holds `target`.
    pub fn delete_value(&mut self, target: &T) -> Result<T, ValueNotFound> {
        let Full(contents) = &mut self.state else {
            return Err(ValueNotFound);
        };
        let node = contents.find(target).ok_or(ValueNotFound)?;

        match contents.len.checked_sub(1) {
            Some(new_len) => {
                contents.unlink(node);
                contents.len = new_len;
            },
            None => self.state = Empty,
        }

        // SAFETY: The node is no longer linked from either side (or was the only node of a list
        // that is now empty).
        Ok(unsafe { node.take_node() }.value)
    }

    /// Returns true if any element of the list is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|i| i == value)
    }
}

impl<T> DoublyList<T> {
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr, "Next and previous links disagree.");
                    curr = next;
                    count += 1;
                }
                assert_eq!(count, len.get(), "The length should match the number of nodes.");

                while let Some(prev) = curr.prev() {
                    curr = prev;
                }
                assert!(curr == head, "Walking back from the tail should end at the head.");
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
        }
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.increment();

        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    /// Links a new node holding `value` directly after `node`, returning the new node.
    pub fn splice_after(&mut self, node: NodeRef<T>, value: T) -> NodeRef<T> {
        self.len = self.len.increment();

        let new_node = NodeRef::from_node(Node {
            value,
            prev: Some(node),
            next: node.next(),
        });

        if let Some(next) = node.next() {
            *next.prev_mut() = Some(new_node);
        }
        *node.next_mut() = Some(new_node);
        new_node
    }

    /// Unlinks `node` from its neighbours without freeing it or updating the length. The list must
    /// hold at least one other node.
    pub fn unlink(&mut self, node: NodeRef<T>) {
        let (prev, next) = (node.prev(), node.next());

        match prev {
            Some(prev) => *prev.next_mut() = next,
            // SAFETY: The node is the head and isn't the only node, so it has a successor.
            None => self.head = unsafe { next.unreachable() },
        }
        if let Some(next) = next {
            *next.prev_mut() = prev;
        }
    }
}

impl<T: PartialEq> ListContents<T> {
    pub fn find(&self, target: &T) -> Option<NodeRef<T>> {
        let mut curr = Some(self.head);
        while let Some(node) = curr {
            if node.value() == target {
                return Some(node);
            }
            curr = node.next();
        }
        None
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T: Clone> Clone for DoublyList<T> {
    fn clone(&self) -> Self {
        let mut values = self.iter();
        let state = match values.next() {
            None => Empty,
            Some(first) => {
                let mut contents = ListContents::wrap_one(first.clone());
                let mut tail = contents.head;
                for value in values {
                    tail = contents.splice_after(tail, value.clone());
                }
                Full(contents)
            },
        };

        DoublyList {
            state,
            _phantom: PhantomData,
        }
    }
}

impl<T> Drop for DoublyList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(node) = curr {
                    curr = node.next();
                    // SAFETY: Each node is visited exactly once, and the list can't be used again
                    // after being dropped.
                    drop(unsafe { node.take_node() });
                }
            },
        }
    }
}

impl<T: PartialEq> PartialEq for DoublyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyList<T> {}

impl<T: Hash> Hash for DoublyList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for DoublyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

/// Writes the elements from head to tail: `3 <-> 1 <-> 2`. An empty list is written as `()`.
impl<T: Display> Display for DoublyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        match values.next() {
            None => write!(f, "()"),
            Some(first) => {
                write!(f, "{first}")?;
                for value in values {
                    write!(f, " <-> {value}")?;
                }
                Ok(())
            },
        }
    }
}
