use std::{cmp::Ordering, collections::VecDeque};

use crate::error::QueueError;

use super::{Iter, IterInner, NaturalOrder, PriorityQueue};

/// Elements kept in descending order at all times.
///
/// Insertion binary-searches its slot and shifts the tail; the greatest
/// element always sits at the front. Equal elements leave in insertion order.
pub struct SortedListPriorityQueue<T, F = NaturalOrder<T>> {
    items: VecDeque<T>,
    compare: F,
}

impl<T: Ord> SortedListPriorityQueue<T> {
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, F> SortedListPriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        SortedListPriorityQueue {
            items: VecDeque::new(),
            compare,
        }
    }

    /// The element at `rank` (0 is the greatest).
    pub fn get(&self, rank: usize) -> Option<&T> {
        self.items.get(rank)
    }
}

impl<T, F> PriorityQueue<T> for SortedListPriorityQueue<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> Ordering,
{
    fn add(&mut self, element: T) {
        let at = self
            .items
            .partition_point(|item| (self.compare)(item, &element) != Ordering::Less);
        self.items.insert(at, element);
    }

    fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    fn remove(&mut self) -> Option<T> {
        self.items.pop_front()
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

    fn iter(&self) -> Result<Iter<'_, T>, QueueError> {
        Ok(Iter {
            inner: IterInner::Sorted(self.items.iter()),
        })
    }
}
