use std::iter;

/// A path found by [`PathFinder::find`](crate::PathFinder::find).
///
/// The reconstruction walks predecessors back from the goal, so the raw
/// [`steps`](Self::steps) run goal-to-start and leave out the start node.
/// [`nodes`](Self::nodes) gives the usual start-to-goal order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N, C> {
    start: N,
    steps: Vec<N>,
    cost: C,
    expanded: usize,
}

impl<N: Copy, C: Copy> Path<N, C> {
    pub(crate) fn new(start: N, steps: Vec<N>, cost: C, expanded: usize) -> Self {
        Self {
            start,
            steps,
            cost,
            expanded,
        }
    }

    /// The node the search started from.
    #[inline]
    pub fn start(&self) -> N {
        self.start
    }

    /// The last node of the path; the start for a trivial path.
    #[inline]
    pub fn goal(&self) -> N {
        self.steps.first().copied().unwrap_or(self.start)
    }

    /// Nodes after the start, goal first.
    #[inline]
    pub fn steps(&self) -> &[N] {
        &self.steps
    }

    /// Total cost of the path.
    #[inline]
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of nodes the search expanded to find this path.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether start and goal coincide.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All nodes from start to goal, both included.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = N> + '_ {
        iter::once(self.start).chain(self.steps.iter().rev().copied())
    }

    /// Consume the path into its start-to-goal node sequence.
    pub fn into_nodes(self) -> Vec<N> {
        let mut nodes = self.steps;
        nodes.push(self.start);
        nodes.reverse();
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders() {
        let p = Path::new(0, vec![3, 2, 1], 7u32, 3);
        assert_eq!(p.start(), 0);
        assert_eq!(p.goal(), 3);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), &[3, 2, 1]);
        assert_eq!(p.nodes().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(p.nodes().rev().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(p.into_nodes(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn trivial_path() {
        let p = Path::new('a', Vec::new(), 0u8, 0);
        assert!(p.is_empty());
        assert_eq!(p.goal(), 'a');
        assert_eq!(p.into_nodes(), vec!['a']);
    }
}
