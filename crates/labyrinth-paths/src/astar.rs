use std::cmp::Ordering;
use std::collections::BinaryHeap;

use labyrinth_core::Coord;

use crate::distance::manhattan;
use crate::error::SolveError;
use crate::neighbors::Neighbors;
use crate::segment::Segment;
use crate::table::SearchTable;
use crate::traits::{Pather, SegmentSolver};

/// Open-list entry ordered by `f`, then by cell, for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    cell: Coord,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, cell) first.
        other.f.cmp(&self.f).then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* segment search with the Manhattan heuristic.
///
/// Each cell keeps the first path recorded for it and is never re-opened. The
/// search ends as soon as the goal is generated as a neighbor, before it is
/// ever popped. `explored` counts popped entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AStar;

impl SegmentSolver for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn solve_segment(
        &self,
        pather: &dyn Pather,
        from: Coord,
        to: Coord,
        limit: Option<usize>,
    ) -> Result<Segment, SolveError> {
        let (mut table, root) = SearchTable::rooted(pather, from)?;

        if from == to {
            return Ok(Segment {
                explored: 1,
                path: vec![from],
            });
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        open.push(OpenEntry {
            f: manhattan(from, to),
            cell: from,
            idx: root,
        });

        let mut nbuf = Neighbors::new();
        let mut explored = 0;

        while let Some(current) = open.pop() {
            explored += 1;
            if let Some(limit) = limit.filter(|&l| explored > l) {
                return Err(SolveError::ExplorationLimit { from, to, limit });
            }

            let ci = current.idx;
            let g = table.g(ci) + 1;

            for &n in nbuf.cardinal(current.cell, |n| pather.passable(n)) {
                let Some(ni) = table.idx(n) else {
                    continue;
                };
                if table.is_seen(ni) {
                    continue;
                }
                table.record(ni, ci);
                if n == to {
                    return Ok(Segment {
                        explored,
                        path: table.path_to(ni),
                    });
                }
                open.push(OpenEntry {
                    f: g + manhattan(n, to),
                    cell: n,
                    idx: ni,
                });
            }
        }

        Err(SolveError::UnreachableGoal { from, to, explored })
    }
}
