//! The [`Grid`] type — an immutable-by-convention 2D occupancy map.
//!
//! Cells are either walls (`true`) or open (`false`). The outer ring of rows
//! and columns is reserved boundary: searches never step onto it, although an
//! entrance may sit there.

use std::fmt;

use thiserror::Error;

use crate::geom::Coord;

/// Character used for wall cells by [`Grid::from_ascii`] and `Display`.
pub const WALL: char = '#';
/// Character used for open cells by `Display`.
pub const OPEN: char = ' ';

/// Errors produced while building a [`Grid`] from rows or text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows without any columns.
    #[error("grid has no cells")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("grid row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell count does not match the stated dimensions.
    #[error("grid of {height}x{width} holds {cells} cells")]
    SizeMismatch {
        height: usize,
        width: usize,
        cells: usize,
    },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A height × width occupancy grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    height: usize,
    width: usize,
    walls: Vec<bool>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    height: usize,
    width: usize,
    walls: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        if raw.height.checked_mul(raw.width) != Some(raw.walls.len()) {
            return Err(GridError::SizeMismatch {
                height: raw.height,
                width: raw.width,
                cells: raw.walls.len(),
            });
        }
        Ok(Self {
            height: raw.height,
            width: raw.width,
            walls: raw.walls,
        })
    }
}

impl Grid {
    /// Create a grid of the given dimensions with every cell open.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            walls: vec![false; height * width],
        }
    }

    /// Create a grid of the given dimensions with every cell a wall.
    pub fn filled(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            walls: vec![true; height * width],
        }
    }

    /// Build a grid from rows of occupancy flags (`true` = wall).
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut walls = Vec::with_capacity(rows.len() * width);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            walls.extend_from_slice(r);
        }
        Ok(Self {
            height: rows.len(),
            width,
            walls,
        })
    }

    /// Parse a grid from text: `#` is a wall, any other character is open.
    ///
    /// Every line must have the same number of characters. A single trailing
    /// newline is ignored.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<bool>> = text
            .lines()
            .map(|line| line.chars().map(|ch| ch == WALL).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Whether `c` lies inside the grid, boundary ring included.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    /// Whether `c` lies strictly inside the boundary ring:
    /// `0 < row < height - 1` and `0 < col < width - 1`.
    #[inline]
    pub fn in_interior(&self, c: Coord) -> bool {
        let (h, w) = (self.height as i64, self.width as i64);
        let (r, c) = (c.row as i64, c.col as i64);
        r > 0 && c > 0 && r < h - 1 && c < w - 1
    }

    /// Whether `c` is a wall. Cells outside the grid count as walls.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.index(c).is_none_or(|i| self.walls[i])
    }

    /// Mark `c` as wall or open. Does nothing if `c` is outside the grid.
    pub fn set_wall(&mut self, c: Coord, wall: bool) {
        if let Some(i) = self.index(c) {
            self.walls[i] = wall;
        }
    }

    /// Number of wall cells.
    pub fn count_walls(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Iterate over all cells in row-major order as `(coord, is_wall)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        let width = self.width;
        self.walls
            .iter()
            .enumerate()
            .map(move |(i, &w)| (Coord::new((i / width) as i32, (i % width) as i32), w))
    }

    /// Flat row-major index of `c`, or `None` if outside the grid.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (row, col) = (c.row as usize, c.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.walls.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &w in row {
                write!(f, "{}", if w { WALL } else { OPEN })?;
            }
        }
        Ok(())
    }
}
