use std::cmp::Ordering;

/// Heap entry ordered by `(priority, rank)` only; the value never takes part
/// in comparisons.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T, P, R> {
    pub(crate) priority: P,
    pub(crate) rank: R,
    pub(crate) value: T,
}

impl<T, P: Ord, R: Ord> PartialEq for Entry<T, P, R> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord, R: Ord> Eq for Entry<T, P, R> {}

impl<T, P: Ord, R: Ord> PartialOrd for Entry<T, P, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord, R: Ord> Ord for Entry<T, P, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest key first.
        (&other.priority, &other.rank).cmp(&(&self.priority, &self.rank))
    }
}
