use labyrinth_core::Coord;

/// Result of one start → goal segment search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Cells examined (dequeued or popped) while searching.
    pub explored: usize,
    /// Inclusive walk from the segment start to its goal.
    pub path: Vec<Coord>,
}

impl Segment {
    /// Number of steps (edges) in the walk.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
