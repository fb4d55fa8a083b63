//! # Priority queues
//!
//! One contract, [`PriorityQueue`], over three interchangeable backing stores.
//! All of them order elements with a caller supplied comparison and hand out
//! the greatest element first.
//!
//! | backing                        | add         | peek / remove | [`iter`](PriorityQueue::iter)       |
//! |--------------------------------|-------------|---------------|-------------------------------------|
//! | [`UnsortedListPriorityQueue`]  | O(1)        | O(n)          | sorted copy, built on demand        |
//! | [`SortedListPriorityQueue`]    | O(n)        | O(1)          | walks the store directly            |
//! | [`BinaryHeapPriorityQueue`]    | O(log n)    | O(1) / O(log n) | [`QueueError::EnumerationUnsupported`] |
//!
//! The heap stores `Rc<T>` and finds its entries by pointer identity, never by
//! value: two equal values added separately stay two distinct entries.

use std::{collections::vec_deque, vec};

use crate::error::QueueError;

pub mod heap;
pub mod sorted;
pub mod unsorted;

pub use heap::BinaryHeapPriorityQueue;
pub use sorted::SortedListPriorityQueue;
pub use unsorted::UnsortedListPriorityQueue;

/// The comparison a queue falls back to when built with `natural()`.
pub type NaturalOrder<T> = fn(&T, &T) -> std::cmp::Ordering;

pub trait PriorityQueue<T> {
    fn add(&mut self, element: T);

    /// The greatest element, `None` when the queue is empty.
    fn peek(&self) -> Option<&T>;

    /// Takes out the greatest element, `None` when the queue is empty.
    fn remove(&mut self) -> Option<T>;

    fn clear(&mut self);

    fn contains(&self, element: &T) -> bool;

    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Elements from greatest to smallest, without removing them.
    fn iter(&self) -> Result<Iter<'_, T>, QueueError>;

    fn add_all(&mut self, elements: impl IntoIterator<Item = T>)
    where
        Self: Sized,
    {
        for element in elements {
            self.add(element);
        }
    }
}

/// Non-destructive walk over a queue, greatest element first.
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

enum IterInner<'a, T> {
    Snapshot(vec::IntoIter<&'a T>),
    Sorted(vec_deque::Iter<'a, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Snapshot(it) => it.next(),
            IterInner::Sorted(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Snapshot(it) => it.size_hint(),
            IterInner::Sorted(it) => it.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
