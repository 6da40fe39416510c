use labyrinth_core::Coord;

use crate::bfs::{Frontier, uninformed};
use crate::error::SolveError;
use crate::segment::Segment;
use crate::traits::{Pather, SegmentSolver};

/// Segment search used by the greedy nearest-goal strategy.
///
/// "Greedy" applies to goal selection only, which is the job of
/// [`RouterKind::NearestGoal`](crate::RouterKind::NearestGoal). Within a
/// segment the search is plain breadth-first, identical to [`Bfs`](crate::Bfs);
/// the two strategies differ only in the router [`Strategy::Greedy`](crate::Strategy::Greedy)
/// pairs them with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Greedy;

impl SegmentSolver for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve_segment(
        &self,
        pather: &dyn Pather,
        from: Coord,
        to: Coord,
        limit: Option<usize>,
    ) -> Result<Segment, SolveError> {
        uninformed(pather, from, to, limit, Frontier::Fifo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::fixtures::*;

    #[test]
    fn segments_match_breadth_first() {
        let g = grid(TWO_ROOMS);
        let (from, to) = (Coord::new(1, 1), Coord::new(4, 10));
        let greedy = Greedy.solve_segment(&g, from, to, None).unwrap();
        let bfs = Bfs.solve_segment(&g, from, to, None).unwrap();
        assert_eq!(greedy, bfs);
        assert_eq!(Some(greedy.steps()), shortest_distance(&g, from, to));
    }
}
