use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::entry::Entry;

/// Lowest-priority-first stack, LIFO among equal priorities.
///
/// An item pushed at priority 3 is popped before every earlier item of
/// priority 3 but never before an item of priority 2.
#[derive(Debug, Clone)]
pub struct PriorityStack<T, P = i64> {
    heap: BinaryHeap<Entry<T, P, Reverse<u64>>>,
    seq: u64,
}

impl<T, P: Ord> Default for PriorityStack<T, P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T, P: Ord> PriorityStack<T, P> {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `value` on top of every stacked item of the same priority.
    pub fn push(&mut self, value: T, priority: P) {
        self.heap.push(Entry {
            priority,
            rank: Reverse(self.seq),
            value,
        });
        self.seq += 1;
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.value)
    }

    /// The top item with its priority, without removing it.
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

impl<T, P: Ord> Extend<(T, P)> for PriorityStack<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.push(value, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityStack<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, P: Ord>(mut s: PriorityStack<T, P>) -> Vec<T> {
        std::iter::from_fn(|| s.pop()).collect()
    }

    #[test]
    fn lifo_within_a_priority() {
        let mut s = PriorityStack::new();
        s.push("first", 3);
        s.push("low", 4);
        s.push("second", 3);
        s.push("urgent", 2);
        s.push("third", 3);
        assert_eq!(drain(s), vec!["urgent", "third", "second", "first", "low"]);
    }

    #[test]
    fn collect_and_peek() {
        let s: PriorityStack<char> = [('a', 1), ('b', 1), ('c', 0)].into_iter().collect();
        assert_eq!(s.peek(), Some((&'c', &0)));
        assert_eq!(s.len(), 3);
        assert_eq!(drain(s), vec!['c', 'b', 'a']);
    }
}
