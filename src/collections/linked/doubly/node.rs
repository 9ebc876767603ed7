use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: This implementation uses Box<T> rather than alloc to allocate space on the heap, because
// Box<T> has the special property that dereferencing it allows a value to be moved out of the heap.

/// A non-owning handle to a node in a [`DoublyList`](super::DoublyList). Both `prev` and `next`
/// are handles of this kind; the list alone owns the allocations.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodeRef only exists for nodes that are linked into a list, and the list keeps
        // them allocated until they are unlinked or the list is dropped.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above, and the list only hands out one mutable reference at a time.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(&self) -> Link<T> {
        // SAFETY: The node is allocated, see NodeRef::value.
        unsafe { (*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is allocated, see NodeRef::value.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next(&self) -> Link<T> {
        // SAFETY: The node is allocated, see NodeRef::value.
        unsafe { (*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is allocated, see NodeRef::value.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the node's allocation and moves it out.
    ///
    /// # Safety
    /// The node must no longer be reachable from the list, and this must be the only call to
    /// `take_node` for it.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was leaked from a Box in from_node and the caller guarantees that it
        // hasn't already been reclaimed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
