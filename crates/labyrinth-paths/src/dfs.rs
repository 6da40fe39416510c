use labyrinth_core::Coord;

use crate::bfs::{Frontier, uninformed};
use crate::error::SolveError;
use crate::segment::Segment;
use crate::traits::{Pather, SegmentSolver};

/// Depth-first segment search.
///
/// Returns the first walk discovered with a last-in-first-out frontier. The
/// walk is valid but usually not the shortest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dfs;

impl SegmentSolver for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn solve_segment(
        &self,
        pather: &dyn Pather,
        from: Coord,
        to: Coord,
        limit: Option<usize>,
    ) -> Result<Segment, SolveError> {
        uninformed(pather, from, to, limit, Frontier::Lifo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::fixtures::*;

    #[test]
    fn follows_last_pushed_neighbor_first() {
        let g = grid(OPEN_3X3);
        let seg = Dfs.solve_segment(&g, Coord::new(1, 1), Coord::new(3, 3), None).unwrap();
        // East is pushed last, so it is expanded first.
        assert_eq!(
            seg.path,
            vec![
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(1, 3),
                Coord::new(2, 3),
                Coord::new(3, 3),
            ]
        );
        assert_eq!(seg.explored, 5);
    }

    #[test]
    fn valid_but_not_shorter_than_bfs() {
        let g = grid(TWO_ROOMS);
        let (from, to) = (Coord::new(5, 1), Coord::new(1, 11));
        let dfs = Dfs.solve_segment(&g, from, to, None).unwrap();
        let bfs = Bfs.solve_segment(&g, from, to, None).unwrap();
        assert_walk(&g, &dfs.path);
        assert_eq!(dfs.path.last(), Some(&to));
        assert!(dfs.steps() >= bfs.steps());
    }

    #[test]
    fn unreachable_goal_is_an_error() {
        let g = grid(SEALED);
        let err = Dfs.solve_segment(&g, Coord::new(2, 5), Coord::new(1, 1), None).unwrap_err();
        assert_eq!(
            err,
            SolveError::UnreachableGoal {
                from: Coord::new(2, 5),
                to: Coord::new(1, 1),
                explored: 12,
            }
        );
    }
}
