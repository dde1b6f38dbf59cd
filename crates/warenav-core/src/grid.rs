//! The warehouse grid: fixed bounds plus a set of blocked cells.

use std::collections::HashSet;
use std::fmt;

use crate::geom::Point;

/// Errors that can occur when constructing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero or negative.
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size rectangular grid of cells with blocking obstacles.
///
/// Cells span the half-open ranges `[0, width)` × `[0, height)`. The
/// blocked set is fixed at construction; a different obstacle layout
/// requires a new `Grid`. Because nothing mutates after construction,
/// a `&Grid` can be shared freely between concurrent path queries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: HashSet<Point>,
}

impl Grid {
    /// Create a new grid.
    ///
    /// Fails if either dimension is non-positive. Blocked cells outside
    /// the grid bounds are discarded, so the blocked set is always a
    /// subset of the grid's cells.
    pub fn new(width: i32, height: i32, mut blocked: HashSet<Point>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        blocked.retain(|&p| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height);
        Ok(Self {
            width,
            height,
            blocked,
        })
    }

    /// Create a grid with no obstacles.
    pub fn open(width: i32, height: i32) -> Result<Self, GridError> {
        Self::new(width, height, HashSet::new())
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is an obstacle cell.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    /// Whether `p` is within bounds and not blocked.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.contains(p) && !self.is_blocked(p)
    }

    /// The blocked-cell set.
    pub fn blocked(&self) -> &HashSet<Point> {
        &self.blocked
    }

    /// Append the passable cardinal neighbors of `p` into `buf`.
    ///
    /// Candidates are visited in left, right, up, down order and filtered
    /// to in-bounds, non-blocked cells. The caller clears `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut blocked = HashSet::new();
        blocked.insert(Point::new(2, 3));
        let g = Grid::new(6, 4, blocked).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 6);
        assert_eq!(back.height(), 4);
        assert!(back.is_blocked(Point::new(2, 3)));
    }
}
