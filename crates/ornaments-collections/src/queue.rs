use std::collections::BinaryHeap;

use crate::entry::Entry;

/// Lowest-priority-first queue, FIFO among equal priorities.
///
/// An item enqueued at priority 3 leaves after every earlier item of
/// priority 3 but before any item of priority 4.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = i64> {
    heap: BinaryHeap<Entry<T, P, u64>>,
    seq: u64,
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` behind every queued item of the same priority.
    pub fn push(&mut self, value: T, priority: P) {
        self.heap.push(Entry {
            priority,
            rank: self.seq,
            value,
        });
        self.seq += 1;
    }

    /// Remove and return the front item.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.value)
    }

    /// The front item with its priority, without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.peek().map(|e| (&e.value, &e.priority))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.push(value, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, P: Ord>(mut q: PriorityQueue<T, P>) -> Vec<T> {
        std::iter::from_fn(|| q.pop()).collect()
    }

    #[test]
    fn lowest_priority_first() {
        let q: PriorityQueue<_> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(drain(q), vec!["a", "b", "c"]);
    }

    #[test]
    fn fifo_within_a_priority() {
        let mut q = PriorityQueue::new();
        q.push("first", 3);
        q.push("low", 4);
        q.push("second", 3);
        q.push("urgent", 1);
        q.push("third", 3);
        assert_eq!(drain(q), vec!["urgent", "first", "second", "third", "low"]);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = PriorityQueue::new();
        assert_eq!(q.peek(), None);
        q.push('x', 5);
        q.push('y', 5);
        assert_eq!(q.peek(), Some((&'x', &5)));
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
    }
}
