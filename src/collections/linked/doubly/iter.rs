use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{DoublyList, Link, ListContents, ListState};

impl<'a, T> IntoIterator for &'a DoublyList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let next = match &self.state {
            ListState::Empty => None,
            ListState::Full(ListContents { head, .. }) => Some(*head),
        };

        Iter {
            next,
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over a [`DoublyList`], from head to tail.
pub struct Iter<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node.value())
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
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}
