use labyrinth_core::Coord;

/// Cached neighbor computation helper.
///
/// Enumerates the 4-directional neighbors of a cell in the fixed
/// north, south, west, east order, filtered by a predicate. The order decides
/// which walk the non-optimal strategies find first.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `c` for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
