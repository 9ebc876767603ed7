use std::ptr::NonNull;

// NOTE: Nodes are allocated with Box<T> rather than alloc directly, because Box<T> allows the value
// to be moved back out of the heap once a node is unlinked.

/// A non-owning handle to a node in a ring. Every node's `next` is another valid node of the same
/// ring (possibly itself), so there is no null link to represent.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodeRef only exists for nodes that are currently linked into a ring, and the
        // ring keeps its nodes allocated until they are unlinked or the list is dropped.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above, and the list only hands out one mutable reference at a time.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next(&self) -> NodeRef<T> {
        // SAFETY: The node is allocated, see NodeRef::value.
        unsafe { (*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut NodeRef<T> {
        // SAFETY: The node is allocated, see NodeRef::value.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Allocates a node that links to itself, forming a ring of one.
    pub fn new_ring(value: T) -> NodeRef<T> {
        let node = NodeRef::from_node(Node {
            value,
            next: NodeRef(NonNull::dangling()),
        });
        *node.next_mut() = node;
        node
    }

    /// Allocates a node which links to `next`. The caller is responsible for linking a node to the
    /// new one, otherwise it leaks.
    pub fn new_before(value: T, next: NodeRef<T>) -> NodeRef<T> {
        NodeRef::from_node(Node { value, next })
    }

    fn from_node(node: Node<T>) -> NodeRef<T> {
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
    pub next: NodeRef<T>,
}
