use labyrinth_core::{Coord, Grid};

use crate::error::SolveError;
use crate::segment::Segment;

/// Read-only adjacency interface every search strategy consumes.
///
/// Only `height`, `width` and `is_wall` are required; the interior and
/// passability rules derive from them.
pub trait Pather {
    /// Number of rows.
    fn height(&self) -> usize;

    /// Number of columns.
    fn width(&self) -> usize;

    /// Whether `c` is blocked.
    fn is_wall(&self, c: Coord) -> bool;

    /// Whether `c` lies anywhere on the grid, boundary ring included.
    fn contains(&self, c: Coord) -> bool {
        c.row >= 0
            && c.col >= 0
            && (c.row as usize) < self.height()
            && (c.col as usize) < self.width()
    }

    /// Whether `c` lies strictly inside the reserved boundary ring.
    fn in_interior(&self, c: Coord) -> bool {
        c.row > 0
            && c.col > 0
            && (c.row as usize) + 1 < self.height()
            && (c.col as usize) + 1 < self.width()
    }

    /// Whether a search may step onto `c`.
    fn passable(&self, c: Coord) -> bool {
        self.in_interior(c) && !self.is_wall(c)
    }
}

impl Pather for Grid {
    fn height(&self) -> usize {
        Grid::height(self)
    }

    fn width(&self) -> usize {
        Grid::width(self)
    }

    fn is_wall(&self, c: Coord) -> bool {
        Grid::is_wall(self, c)
    }

    fn in_interior(&self, c: Coord) -> bool {
        Grid::in_interior(self, c)
    }
}

/// Finds a walk between two coordinates.
///
/// Implementations keep their search state local to one call, so a single
/// solver value can be reused across segments and solves.
pub trait SegmentSolver {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Search from `from` to `to`, examining at most `limit` cells when a
    /// limit is given. The returned path includes both endpoints.
    fn solve_segment(
        &self,
        pather: &dyn Pather,
        from: Coord,
        to: Coord,
        limit: Option<usize>,
    ) -> Result<Segment, SolveError>;
}

/// Chooses which remaining goal a tour visits next.
pub trait Router {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Index into `remaining` of the next goal to visit from `current`.
    /// `remaining` keeps the caller's original goal order.
    fn next_goal(&self, current: Coord, remaining: &[Coord]) -> Option<usize>;
}
