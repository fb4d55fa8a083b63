use std::cmp::Ordering;

use crate::error::QueueError;

use super::{Iter, IterInner, NaturalOrder, PriorityQueue};

/// Elements kept in insertion order; the greatest one is searched for on demand.
///
/// Among equal elements the one added first comes out first.
pub struct UnsortedListPriorityQueue<T, F = NaturalOrder<T>> {
    items: Vec<T>,
    compare: F,
}

impl<T: Ord> UnsortedListPriorityQueue<T> {
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, F> UnsortedListPriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        UnsortedListPriorityQueue {
            items: Vec::new(),
            compare,
        }
    }

    fn max_position(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, item) in self.items.iter().enumerate() {
            match best {
                Some(b) if (self.compare)(item, &self.items[b]) != Ordering::Greater => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<T, F> PriorityQueue<T> for UnsortedListPriorityQueue<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> Ordering,
{
    fn add(&mut self, element: T) {
        self.items.push(element);
    }

    fn peek(&self) -> Option<&T> {
        self.max_position().map(|i| &self.items[i])
    }

    fn remove(&mut self) -> Option<T> {
        self.max_position().map(|i| self.items.remove(i))
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn contains(&self, element: &T) -> bool {
        self.items.contains(element)
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    /// Builds a sorted snapshot of references first, so each call costs O(n log n).
    fn iter(&self) -> Result<Iter<'_, T>, QueueError> {
        let mut snapshot: Vec<&T> = self.items.iter().collect();
        snapshot.sort_by(|a, b| (self.compare)(b, a));
        Ok(Iter {
            inner: IterInner::Snapshot(snapshot.into_iter()),
        })
    }
}
