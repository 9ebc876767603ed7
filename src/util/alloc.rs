use std::cell::Cell;
use std::rc::Rc;

/// A value that records how many times it (or any of its clones) has been dropped, so tests can
/// check that a list frees every node exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub id: usize,
    pub drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new(id: usize, drops: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
