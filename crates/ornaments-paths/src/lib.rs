//! Generic A* path-finding.
//!
//! One search loop ([`PathFinder::find`]) serves every domain that implements
//! [`Domain`]: sparse weighted graphs ([`WeightedGraph`]), dense 4-connected
//! grids ([`Grid`](ornaments_core::Grid)) and 8-connected grids
//! ([`EightWay`]). Callers inject the heuristic and a traversal predicate, so
//! puzzle rules ("can't climb more than one level") stay out of the engine.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Cost`] | numeric edge / path cost |
//! | [`Domain`] | nodes, neighbour enumeration, edge costs |
//! | [`Heuristic`] | admissible estimate of the remaining cost |
//!
//! ```
//! use ornaments_core::{Grid, Point};
//! use ornaments_paths::{Manhattan, find};
//!
//! let grid = Grid::parse("...\n.#.\n...", Some).unwrap();
//! let path = find(
//!     &grid,
//!     &Manhattan,
//!     |step| grid.get(step.to) != Some(&'#'),
//!     Point::new(0, 0),
//!     Point::new(2, 2),
//! )
//! .unwrap();
//! assert_eq!(path.cost(), 4);
//! ```

mod astar;
mod config;
mod cost;
mod distance;
mod error;
mod frontier;
mod graph;
mod grid;
mod neighbors;
mod path;
mod traits;

pub use astar::{PathFinder, find};
pub use config::{CancelFlag, SearchConfig};
pub use cost::Cost;
pub use distance::{Chebyshev, FlatManhattan, Manhattan, Zero, chebyshev, manhattan};
pub use error::PathError;
pub use frontier::Frontier;
pub use graph::WeightedGraph;
pub use grid::EightWay;
pub use neighbors::Neighbors;
pub use path::Path;
pub use traits::{Domain, Heuristic, Step};
