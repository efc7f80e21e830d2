use std::fmt;
use std::hash::Hash;

use crate::cost::Cost;

/// A read-only search space: nodes, adjacency and edge costs.
///
/// The domain is borrowed immutably for the whole search, so independent
/// searches over a `Sync` domain may run on separate threads.
pub trait Domain {
    /// Node identifier. `Ord` drives the frontier's tie-break.
    type Node: Copy + Eq + Hash + Ord + fmt::Debug;
    type Cost: Cost;

    /// Whether `node` belongs to the domain.
    fn contains(&self, node: Self::Node) -> bool;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);

    /// Cost of moving from `from` to adjacent `to`.
    ///
    /// Must be `Some` for every `to` produced by [`neighbors`](Self::neighbors).
    fn cost(&self, from: Self::Node, to: Self::Node) -> Option<Self::Cost>;
}

/// Estimate of the remaining cost from `node` to `goal`.
///
/// The search returns optimal paths only if the estimate never exceeds the
/// true remaining cost (admissible). A consistent estimate
/// (`h(n) <= cost(n, m) + h(m)` for every edge) additionally guarantees that
/// no node is expanded twice.
pub trait Heuristic<N, C> {
    fn estimate(&self, node: N, goal: N) -> C;
}

impl<N, C, F> Heuristic<N, C> for F
where
    F: Fn(N, N) -> C,
{
    #[inline]
    fn estimate(&self, node: N, goal: N) -> C {
        self(node, goal)
    }
}

/// A directed step offered to the traversal predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<N, C> {
    pub from: N,
    pub to: N,
    pub cost: C,
}
