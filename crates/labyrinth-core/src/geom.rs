//! The [`Coord`] geometry primitive.
//!
//! Coordinates are `(row, col)` pairs: rows grow downward, columns grow to the
//! right. Everything in the workspace addresses grid cells through this type.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell address, compared and hashed by value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// One step north (row - 1).
    pub const NORTH: Self = Self { row: -1, col: 0 };
    /// One step south (row + 1).
    pub const SOUTH: Self = Self { row: 1, col: 0 };
    /// One step west (col - 1).
    pub const WEST: Self = Self { row: 0, col: -1 };
    /// One step east (col + 1).
    pub const EAST: Self = Self { row: 0, col: 1 };

    /// Cardinal step order used by every search: north, south, west, east.
    pub const CARDINALS: [Self; 4] = [Self::NORTH, Self::SOUTH, Self::WEST, Self::EAST];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours, in [`Coord::CARDINALS`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 3), Coord::new(0, 5));
    }

    #[test]
    fn neighbor_order_is_north_south_west_east() {
        let c = Coord::new(5, 5);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(4, 5),
                Coord::new(6, 5),
                Coord::new(5, 4),
                Coord::new(5, 6),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(2, 0), Coord::new(1, 9), Coord::new(1, 3)];
        v.sort();
        assert_eq!(v, vec![Coord::new(1, 3), Coord::new(1, 9), Coord::new(2, 0)]);
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(3, 3);
        for n in c.neighbors_4() {
            assert!(c.is_adjacent(n));
        }
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(4, 4)));
        assert!(!c.is_adjacent(Coord::new(3, 5)));
    }

    #[test]
    fn hash_by_value() {
        let set: HashSet<Coord> = [(1, 1), (1, 1), (2, 1)].into_iter().map(Coord::from).collect();
        assert_eq!(set.len(), 2);
        assert_eq!(format!("{}", Coord::new(0, 5)), "(0, 5)");
    }
}
