use std::{cmp::Ordering, rc::Rc};

use by_address::ByAddress;

use crate::error::QueueError;

use super::{Iter, NaturalOrder, PriorityQueue};

/// Array-backed binary max-heap.
///
/// The parent of slot `i` is `(i - 1) / 2`, its children `2i + 1` and `2i + 2`,
/// and no child compares greater than its parent.
///
/// Elements are `Rc<T>` handles. The heap locates an entry by the address it
/// points to, which is what lets [`remove_item`](Self::remove_item) and
/// [`reprioritize`](Self::reprioritize) find the exact entry a caller holds.
/// The same identity rule applies to [`contains`](PriorityQueue::contains).
pub struct BinaryHeapPriorityQueue<T, F = NaturalOrder<T>> {
    heap: Vec<Rc<T>>,
    compare: F,
}

impl<T: Ord> BinaryHeapPriorityQueue<T> {
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, F> BinaryHeapPriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        BinaryHeapPriorityQueue {
            heap: Vec::new(),
            compare,
        }
    }

    /// Removes the entry `element` points to, wherever it sits in the heap.
    pub fn remove_item(&mut self, element: &Rc<T>) -> Option<Rc<T>> {
        let position = self.position(element)?;
        let removed = self.heap.swap_remove(position);
        if position < self.heap.len() {
            self.restore(position);
        }
        Some(removed)
    }

    /// Moves `element` to its right place after its priority changed.
    ///
    /// Only needed when the comparison looks at state that can change behind
    /// the queue's back (a `Cell` inside `T`, for instance). Returns `false`
    /// when `element` is not in the queue.
    pub fn reprioritize(&mut self, element: &Rc<T>) -> bool {
        match self.position(element) {
            Some(position) => {
                self.restore(position);
                true
            }
            None => false,
        }
    }

    fn position(&self, element: &Rc<T>) -> Option<usize> {
        let needle = ByAddress(element.as_ref());
        self.heap
            .iter()
            .position(|entry| ByAddress(entry.as_ref()) == needle)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(self.heap[a].as_ref(), self.heap[b].as_ref()) == Ordering::Less
    }

    fn restore(&mut self, position: usize) {
        let position = self.sift_up(position);
        self.sift_down(position);
    }

    fn sift_up(&mut self, mut node: usize) -> usize {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(parent, node) {
                self.heap.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
        node
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut greater = left;
            if right < len && self.less(left, right) {
                greater = right;
            }

            if self.less(node, greater) {
                self.heap.swap(node, greater);
                node = greater;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn holds_heap_invariant(&self) -> bool {
        (1..self.heap.len()).all(|i| !self.less((i - 1) / 2, i))
    }
}

impl<T, F> PriorityQueue<Rc<T>> for BinaryHeapPriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn add(&mut self, element: Rc<T>) {
        self.heap.push(element);
        self.sift_up(self.heap.len() - 1);
    }

    fn peek(&self) -> Option<&Rc<T>> {
        self.heap.first()
    }

    fn remove(&mut self) -> Option<Rc<T>> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn contains(&self, element: &Rc<T>) -> bool {
        self.position(element).is_some()
    }

    fn count(&self) -> usize {
        self.heap.len()
    }

    /// Always fails: a heap can only be walked in order by emptying it.
    fn iter(&self) -> Result<Iter<'_, Rc<T>>, QueueError> {
        Err(QueueError::EnumerationUnsupported)
    }
}
