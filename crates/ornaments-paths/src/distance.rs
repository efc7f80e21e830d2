//! Distance functions and the stock [`Heuristic`] strategies.

use ornaments_core::Point;

use crate::cost::Cost;
use crate::traits::Heuristic;

/// Manhattan (L1) distance between two points.
///
/// Exact for every pair of `i32` coordinates.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x).max(a.y.abs_diff(b.y)))
}

/// Manhattan distance over [`Point`] nodes.
///
/// Admissible and consistent for 4-connected grids whose steps cost at
/// least 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl<C: Cost> Heuristic<Point, C> for Manhattan {
    #[inline]
    fn estimate(&self, node: Point, goal: Point) -> C {
        C::from_distance(manhattan(node, goal))
    }
}

/// Chebyshev distance over [`Point`] nodes, for 8-connected grids with unit
/// steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl<C: Cost> Heuristic<Point, C> for Chebyshev {
    #[inline]
    fn estimate(&self, node: Point, goal: Point) -> C {
        C::from_distance(chebyshev(node, goal))
    }
}

/// Manhattan distance over flat grid indices `y * width + x`.
///
/// Meant for graphs built with
/// [`WeightedGraph::from_grid`](crate::WeightedGraph::from_grid). On any
/// other graph the estimate is only admissible if every edge weighs at least
/// the grid distance it spans; otherwise the returned path may not be the
/// cheapest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatManhattan {
    width: usize,
}

impl FlatManhattan {
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn decode(&self, idx: usize) -> (usize, usize) {
        (idx % self.width, idx / self.width)
    }
}

impl<C: Cost> Heuristic<usize, C> for FlatManhattan {
    fn estimate(&self, node: usize, goal: usize) -> C {
        if self.width == 0 {
            return C::ZERO;
        }
        let (x1, y1) = self.decode(node);
        let (x2, y2) = self.decode(goal);
        let d = x1.abs_diff(x2) + y1.abs_diff(y2);
        C::from_distance(d as u64)
    }
}

/// The zero estimate. Turns A* into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<N, C: Cost> Heuristic<N, C> for Zero {
    #[inline]
    fn estimate(&self, _node: N, _goal: N) -> C {
        C::ZERO
    }
}
