use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Open set of a best-first search, keyed by priority.
///
/// [`pop`](Self::pop) returns the node with the smallest priority; ties are
/// broken by the smallest node. Pushing a node that is already open replaces
/// its priority (decrease-key), which is visible on the next `pop`.
///
/// Backed by a binary heap with lazy deletion: replaced entries stay in the
/// heap and are skipped when they surface.
#[derive(Debug, Clone)]
pub struct Frontier<N, P> {
    heap: BinaryHeap<Reverse<(P, N)>>,
    open: HashMap<N, P>,
}

impl<N, P> Default for Frontier<N, P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            open: HashMap::new(),
        }
    }
}

impl<N, P> Frontier<N, P>
where
    N: Copy + Eq + Hash + Ord,
    P: Copy + Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node`, or replace its priority if it is already open.
    ///
    /// Returns `true` if the node was not open before.
    pub fn push(&mut self, node: N, priority: P) -> bool {
        let fresh = self.open.insert(node, priority).is_none();
        self.heap.push(Reverse((priority, node)));
        fresh
    }

    /// Remove and return the open node with the smallest priority.
    pub fn pop(&mut self) -> Option<(N, P)> {
        while let Some(Reverse((priority, node))) = self.heap.pop() {
            // Skip entries whose priority was replaced or whose node already left.
            if self.open.get(&node) == Some(&priority) {
                self.open.remove(&node);
                return Some((node, priority));
            }
        }
        None
    }

    /// Whether `node` is currently open.
    #[inline]
    pub fn contains(&self, node: &N) -> bool {
        self.open.contains_key(node)
    }

    /// Current priority of an open node.
    #[inline]
    pub fn priority(&self, node: &N) -> Option<P> {
        self.open.get(node).copied()
    }

    /// Number of open nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut f = Frontier::new();
        f.push('c', 3);
        f.push('a', 1);
        f.push('b', 2);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(('a', 1)));
        assert_eq!(f.pop(), Some(('b', 2)));
        assert_eq!(f.pop(), Some(('c', 3)));
        assert_eq!(f.pop(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn ties_break_on_lowest_node() {
        let mut f = Frontier::new();
        for n in [7u32, 3, 9, 1] {
            f.push(n, 0);
        }
        let order: Vec<_> = std::iter::from_fn(|| f.pop().map(|(n, _)| n)).collect();
        assert_eq!(order, vec![1, 3, 7, 9]);
    }

    #[test]
    fn decrease_key_is_visible() {
        let mut f = Frontier::new();
        f.push(1, 10);
        f.push(2, 5);
        assert!(!f.push(1, 2));
        assert_eq!(f.priority(&1), Some(2));
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop(), Some((1, 2)));
        assert_eq!(f.pop(), Some((2, 5)));
        // the stale (1, 10) entry is skipped
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn increase_key_skips_old_entry() {
        let mut f = Frontier::new();
        f.push(1, 1);
        f.push(2, 5);
        f.push(1, 9);
        assert_eq!(f.pop(), Some((2, 5)));
        assert_eq!(f.pop(), Some((1, 9)));
        assert!(f.is_empty());
    }

    #[test]
    fn contains_tracks_membership() {
        let mut f = Frontier::new();
        assert!(f.push(4, 1));
        assert!(f.contains(&4));
        f.pop();
        assert!(!f.contains(&4));
        assert!(f.push(4, 1));
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn repushing_same_priority_yields_node_once() {
        let mut f = Frontier::new();
        f.push(3, 4);
        f.push(3, 4);
        assert_eq!(f.pop(), Some((3, 4)));
        assert_eq!(f.pop(), None);
    }
}
