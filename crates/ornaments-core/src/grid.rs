//! A dense, row-major grid of cells.
//!
//! [`Grid`] is what character-map puzzle inputs are parsed into. Cells are
//! addressed by [`Point`] or by flat index `y * width + x`.

use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input contained no cells.
    #[error("grid: empty input")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("grid: row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell parser rejected a character.
    #[error("grid: invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// Cell count does not match `width * height`.
    #[error("grid: {len} cells cannot fill a {width}x{height} grid")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// A 2D grid of `T` stored row-major in a single `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: T) {
        self.cells.fill(cell);
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::SizeMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a character map, one row per line.
    ///
    /// Trailing blank lines and `\r` line endings are ignored. `cell` maps each
    /// character to a cell value or rejects it with `None`.
    pub fn parse(text: &str, mut cell: impl FnMut(char) -> Option<T>) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in text.trim_end().lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut found = 0;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                cells.push(cell(ch).ok_or(GridError::InvalidChar { ch, pos })?);
                found += 1;
            }
            if y == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width as i32, self.height as i32)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`. Returns `None` if out of bounds.
    #[inline]
    pub fn point_of(&self, idx: usize) -> Option<Point> {
        if idx >= self.cells.len() {
            return None;
        }
        Some(Point::new((idx % self.width) as i32, (idx / self.width) as i32))
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index_of(p).map(|i| &mut self.cells[i])
    }

    /// Set the cell at a point. Returns `false` if out of bounds.
    pub fn set(&mut self, p: Point, cell: T) -> bool {
        match self.get_mut(p) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// First point, in row-major order, whose cell satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.iter().find(|(_, c)| pred(*c)).map(|(p, _)| p)
    }

    /// Iterate over `(Point, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }

    /// Build a new grid by mapping every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("ab\ncd", Some).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, -7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), p);
    }
}
