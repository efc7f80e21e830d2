//! **ornaments-core** — shared types for the *ornaments* workspace.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! dense row-major [`Grid`] that puzzle inputs are parsed into before being
//! handed to the path-finding crate.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
