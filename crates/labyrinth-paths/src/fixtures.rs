//! Grids and checks shared by the unit tests.

use std::collections::{HashMap, VecDeque};

use labyrinth_core::{Coord, Grid};

use crate::traits::Pather;

/// Two 5×4 rooms joined by a three-cell corridor on row 3.
pub(crate) const TWO_ROOMS: &str = "\
#############
#....###....#
#....###....#
#...........#
#....###....#
#....###....#
#############";

/// A 3×3 open interior.
pub(crate) const OPEN_3X3: &str = "\
#####
#...#
#...#
#...#
#####";

/// A 3×3 open interior with an opening in the boundary at (0, 1).
pub(crate) const ENTRANCE_3X3: &str = "\
#.###
#...#
#...#
#...#
#####";

/// The right-hand room is sealed off.
pub(crate) const SEALED: &str = "\
#########
#..#....#
#..#....#
#..#....#
#########";

pub(crate) fn grid(text: &str) -> Grid {
    Grid::from_ascii(text).unwrap()
}

/// Shortest edge count from `from` to `to`, computed independently of the
/// solvers with a plain distance-map BFS.
pub(crate) fn shortest_distance(grid: &Grid, from: Coord, to: Coord) -> Option<usize> {
    let mut dist = HashMap::from([(from, 0usize)]);
    let mut queue = VecDeque::from([from]);
    while let Some(c) = queue.pop_front() {
        let d = dist[&c];
        if c == to {
            return Some(d);
        }
        for n in c.neighbors_4() {
            if grid.passable(n) && !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

/// Every step is orthogonal and no cell but the first is off the walkable
/// interior.
pub(crate) fn assert_walk(grid: &Grid, path: &[Coord]) {
    assert!(!path.is_empty());
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {} is not one step", pair[0], pair[1]);
    }
    for &c in path {
        assert!(!grid.is_wall(c), "{c} is a wall");
    }
    for &c in &path[1..] {
        assert!(grid.passable(c), "{c} is not walkable");
    }
}
