use std::collections::BTreeMap;

use ornaments_core::Grid;

use crate::cost::Cost;
use crate::traits::Domain;

/// A directed graph over `usize` node ids with a weight on every edge.
///
/// Adjacency is kept in ordered maps, so neighbour enumeration (and with it
/// every search over the graph) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedGraph<C> {
    adjacency: BTreeMap<usize, BTreeMap<usize, C>>,
}

impl<C> Default for WeightedGraph<C> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<C: Cost> WeightedGraph<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph over a grid's flat indices (`y * width + x`).
    ///
    /// Every cell becomes a node. For each in-bounds cardinal neighbour,
    /// `weight(from_cell, to_cell)` decides whether the directed edge exists
    /// and what it costs.
    pub fn from_grid<T>(grid: &Grid<T>, mut weight: impl FnMut(&T, &T) -> Option<C>) -> Self {
        let mut graph = Self::new();
        for (p, cell) in grid.iter() {
            let Some(pi) = grid.index_of(p) else {
                continue;
            };
            graph.add_node(pi);
            for n in p.neighbors_4() {
                let (Some(ni), Some(ncell)) = (grid.index_of(n), grid.get(n)) else {
                    continue;
                };
                if let Some(w) = weight(cell, ncell) {
                    graph.add_edge(pi, ni, w);
                }
            }
        }
        graph
    }

    /// Add an isolated node. Returns `false` if it already exists.
    pub fn add_node(&mut self, p: usize) -> bool {
        if self.adjacency.contains_key(&p) {
            return false;
        }
        self.adjacency.insert(p, BTreeMap::new());
        true
    }

    /// Whether `p` is a node of the graph.
    #[inline]
    pub fn contains_node(&self, p: usize) -> bool {
        self.adjacency.contains_key(&p)
    }

    /// Add the edge `p -> q` with weight `w`, creating both nodes as needed.
    ///
    /// Returns `false`, leaving the existing weight in place, if the edge is
    /// already present.
    pub fn add_edge(&mut self, p: usize, q: usize, w: C) -> bool {
        self.add_node(q);
        let out = self.adjacency.entry(p).or_default();
        if out.contains_key(&q) {
            return false;
        }
        out.insert(q, w);
        true
    }

    /// Remove the edge `p -> q`. Nodes are kept. Returns `false` if there was
    /// no such edge.
    pub fn remove_edge(&mut self, p: usize, q: usize) -> bool {
        self.adjacency
            .get_mut(&p)
            .is_some_and(|out| out.remove(&q).is_some())
    }

    /// Remove node `p` and every edge into or out of it. Other node ids are
    /// unchanged.
    pub fn remove_node(&mut self, p: usize) -> bool {
        if self.adjacency.remove(&p).is_none() {
            return false;
        }
        for out in self.adjacency.values_mut() {
            out.remove(&p);
        }
        true
    }

    /// Whether the edge `p -> q` exists.
    #[inline]
    pub fn adjacent(&self, p: usize, q: usize) -> bool {
        self.weight(p, q).is_some()
    }

    /// Weight of the edge `p -> q`.
    #[inline]
    pub fn weight(&self, p: usize, q: usize) -> Option<C> {
        self.adjacency.get(&p)?.get(&q).copied()
    }

    /// Every `q` with an edge `p -> q`, in ascending order.
    pub fn successors(&self, p: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(&p).into_iter().flat_map(|out| out.keys().copied())
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.keys().copied()
    }

    /// All edges as `(p, q, w)`, ordered by `p` then `q`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&p, out)| out.iter().map(move |(&q, &w)| (p, q, w)))
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|out| out.len()).sum()
    }
}

impl<C: Cost> Domain for WeightedGraph<C> {
    type Node = usize;
    type Cost = C;

    #[inline]
    fn contains(&self, node: usize) -> bool {
        self.contains_node(node)
    }

    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        buf.extend(self.successors(node));
    }

    #[inline]
    fn cost(&self, from: usize, to: usize) -> Option<C> {
        self.weight(from, to)
    }
}
