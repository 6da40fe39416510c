use labyrinth_core::Coord;

use crate::error::ConfigError;
use crate::traits::Pather;

/// Parent sentinel for the search root.
pub(crate) const ROOT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for per-segment searches
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub(crate) struct Node {
    pub(crate) parent: usize,
    pub(crate) g: i32,
    pub(crate) seen: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: ROOT,
            g: 0,
            seen: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchTable
// ---------------------------------------------------------------------------

/// Ephemeral cell → best-known-path table for one segment search.
///
/// Paths are stored as parent pointers over a flat row-major array, so memory
/// stays proportional to the grid no matter how many partial paths the
/// frontier holds. A cell is recorded once and never re-parented.
pub(crate) struct SearchTable {
    height: usize,
    width: usize,
    nodes: Vec<Node>,
}

impl SearchTable {
    pub(crate) fn new(pather: &dyn Pather) -> Self {
        let (height, width) = (pather.height(), pather.width());
        Self {
            height,
            width,
            nodes: vec![Node::default(); height * width],
        }
    }

    /// Create a table and record `root` as the start of every path.
    pub(crate) fn rooted(pather: &dyn Pather, root: Coord) -> Result<(Self, usize), ConfigError> {
        let mut table = Self::new(pather);
        let idx = table.idx(root).ok_or(ConfigError::OutOfBounds(root))?;
        table.record(idx, ROOT);
        Ok((table, idx))
    }

    /// Convert a `Coord` to a flat index. Returns `None` if off the grid.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (row, col) = (c.row as usize, c.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    #[inline]
    pub(crate) fn is_seen(&self, idx: usize) -> bool {
        self.nodes[idx].seen
    }

    /// Path length (edges) from the root to `idx`.
    #[inline]
    pub(crate) fn g(&self, idx: usize) -> i32 {
        self.nodes[idx].g
    }

    /// Record `idx` as reached through `parent`.
    pub(crate) fn record(&mut self, idx: usize, parent: usize) {
        let g = if parent == ROOT { 0 } else { self.nodes[parent].g + 1 };
        self.nodes[idx] = Node {
            parent,
            g,
            seen: true,
        };
    }

    /// Reconstruct the inclusive root → `idx` path.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Coord> {
        let mut path = Vec::with_capacity(self.nodes[idx].g as usize + 1);
        let mut ci = idx;
        while ci != ROOT {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
