use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{CircularList, NodeRef};

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            node: self.head,
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over one lap of a [`CircularList`], starting at the head.
///
/// The ring itself never ends, so the iterator counts down the elements left to yield instead.
/// Calling [`CircularList::iter`] again restarts the traversal from the head.
pub struct Iter<'a, T> {
    pub(crate) node: NodeRef<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        let value = self.node.value();
        self.node = self.node.next();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            node: self.node,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}
