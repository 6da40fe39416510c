use std::collections::VecDeque;

use labyrinth_core::Coord;

use crate::error::SolveError;
use crate::neighbors::Neighbors;
use crate::segment::Segment;
use crate::table::SearchTable;
use crate::traits::{Pather, SegmentSolver};

/// Frontier discipline for the uninformed searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Frontier {
    /// First in, first out: breadth-first.
    Fifo,
    /// Last in, first out: depth-first.
    Lifo,
}

/// Uninformed search shared by BFS and DFS.
///
/// A cell is marked at first discovery, so it enters the frontier at most
/// once. `explored` counts every cell taken off the frontier, the goal
/// included.
pub(crate) fn uninformed(
    pather: &dyn Pather,
    from: Coord,
    to: Coord,
    limit: Option<usize>,
    frontier: Frontier,
) -> Result<Segment, SolveError> {
    let (mut table, root) = SearchTable::rooted(pather, from)?;
    let mut open: VecDeque<usize> = VecDeque::from([root]);
    let mut nbuf = Neighbors::new();
    let mut explored = 0;

    loop {
        let next = match frontier {
            Frontier::Fifo => open.pop_front(),
            Frontier::Lifo => open.pop_back(),
        };
        let Some(ci) = next else {
            break;
        };

        explored += 1;
        if let Some(limit) = limit.filter(|&l| explored > l) {
            return Err(SolveError::ExplorationLimit { from, to, limit });
        }

        let cell = table.coord(ci);
        if cell == to {
            return Ok(Segment {
                explored,
                path: table.path_to(ci),
            });
        }

        for &n in nbuf.cardinal(cell, |n| pather.passable(n)) {
            let Some(ni) = table.idx(n) else {
                continue;
            };
            if table.is_seen(ni) {
                continue;
            }
            table.record(ni, ci);
            open.push_back(ni);
        }
    }

    Err(SolveError::UnreachableGoal { from, to, explored })
}

/// Breadth-first segment search: returns a walk with the fewest steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bfs;

impl SegmentSolver for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
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
    use crate::fixtures::*;

    #[test]
    fn finds_first_shortest_walk() {
        let g = grid(OPEN_3X3);
        let seg = Bfs.solve_segment(&g, Coord::new(1, 1), Coord::new(3, 3), None).unwrap();
        assert_eq!(
            seg.path,
            vec![
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(3, 1),
                Coord::new(3, 2),
                Coord::new(3, 3),
            ]
        );
        assert_eq!(seg.explored, 9);
    }

    #[test]
    fn length_matches_independent_distance() {
        let g = grid(TWO_ROOMS);
        let open: Vec<Coord> = g
            .iter()
            .filter(|&(c, wall)| !wall && g.passable(c))
            .map(|(c, _)| c)
            .collect();
        let from = Coord::new(1, 1);
        for &to in &open {
            let seg = Bfs.solve_segment(&g, from, to, None).unwrap();
            assert_walk(&g, &seg.path);
            assert_eq!(seg.path.first(), Some(&from));
            assert_eq!(seg.path.last(), Some(&to));
            assert_eq!(Some(seg.steps()), shortest_distance(&g, from, to), "to {to}");
        }
    }

    #[test]
    fn same_endpoints_is_a_single_cell() {
        let g = grid(OPEN_3X3);
        let c = Coord::new(2, 2);
        let seg = Bfs.solve_segment(&g, c, c, None).unwrap();
        assert_eq!(seg.path, vec![c]);
        assert_eq!(seg.explored, 1);
    }

    #[test]
    fn start_on_boundary_enters_interior() {
        let g = grid(ENTRANCE_3X3);
        let seg = Bfs.solve_segment(&g, Coord::new(0, 1), Coord::new(1, 3), None).unwrap();
        assert_eq!(seg.path.first(), Some(&Coord::new(0, 1)));
        assert_eq!(seg.steps(), 3);
        assert_walk(&g, &seg.path);
    }

    #[test]
    fn unreachable_goal_reports_component_size() {
        let g = grid(SEALED);
        let err = Bfs.solve_segment(&g, Coord::new(1, 1), Coord::new(2, 6), None).unwrap_err();
        assert_eq!(
            err,
            SolveError::UnreachableGoal {
                from: Coord::new(1, 1),
                to: Coord::new(2, 6),
                explored: 6,
            }
        );
    }

    #[test]
    fn exploration_limit_stops_search() {
        let g = grid(TWO_ROOMS);
        let err = Bfs
            .solve_segment(&g, Coord::new(1, 1), Coord::new(5, 11), Some(5))
            .unwrap_err();
        assert!(matches!(err, SolveError::ExplorationLimit { limit: 5, .. }));
        assert!(Bfs.solve_segment(&g, Coord::new(1, 1), Coord::new(5, 11), Some(500)).is_ok());
    }
}
