//! Grid domains: every in-bounds cell is a node and each move costs 1.
//!
//! Which cells can actually be entered is decided by the caller's traversal
//! predicate, typically by looking the destination up in the grid.

use ornaments_core::{Grid, Point};

use crate::neighbors::Neighbors;
use crate::traits::Domain;

/// 4-connected: up, right, down and left.
impl<T> Domain for Grid<T> {
    type Node = Point;
    type Cost = u32;

    #[inline]
    fn contains(&self, node: Point) -> bool {
        Grid::contains(self, node)
    }

    fn neighbors(&self, node: Point, buf: &mut Vec<Point>) {
        Neighbors::Cardinal.collect_into(node, buf, |n| Grid::contains(self, n));
    }

    fn cost(&self, from: Point, to: Point) -> Option<u32> {
        grid_step(self, Neighbors::Cardinal, from, to)
    }
}

/// 8-connected view of a grid: diagonal moves also cost 1.
///
/// Pair it with [`Chebyshev`](crate::Chebyshev); Manhattan overestimates
/// diagonal distances and would lose optimality.
#[derive(Debug, Clone, Copy)]
pub struct EightWay<'a, T>(pub &'a Grid<T>);

impl<T> Domain for EightWay<'_, T> {
    type Node = Point;
    type Cost = u32;

    #[inline]
    fn contains(&self, node: Point) -> bool {
        self.0.contains(node)
    }

    fn neighbors(&self, node: Point, buf: &mut Vec<Point>) {
        Neighbors::All.collect_into(node, buf, |n| self.0.contains(n));
    }

    fn cost(&self, from: Point, to: Point) -> Option<u32> {
        grid_step(self.0, Neighbors::All, from, to)
    }
}

fn grid_step<T>(grid: &Grid<T>, connectivity: Neighbors, from: Point, to: Point) -> Option<u32> {
    (grid.contains(from) && grid.contains(to) && connectivity.adjacent(from, to)).then_some(1)
}
