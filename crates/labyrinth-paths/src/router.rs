use labyrinth_core::Coord;
use log::trace;

use crate::distance::manhattan;
use crate::traits::Router;

/// Built-in goal sequencing policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RouterKind {
    /// Visit goals in the order they were given.
    #[default]
    FixedOrder,
    /// Visit the remaining goal with the smallest Manhattan distance from the
    /// current position; ties go to the goal listed first.
    NearestGoal,
}

impl Router for RouterKind {
    fn name(&self) -> &'static str {
        match self {
            Self::FixedOrder => "fixed-order",
            Self::NearestGoal => "nearest-goal",
        }
    }

    fn next_goal(&self, current: Coord, remaining: &[Coord]) -> Option<usize> {
        if remaining.is_empty() {
            return None;
        }
        match self {
            Self::FixedOrder => Some(0),
            Self::NearestGoal => {
                let (i, d) = remaining
                    .iter()
                    .enumerate()
                    .map(|(i, &g)| (i, manhattan(current, g)))
                    .min_by_key(|&(i, d)| (d, i))?;
                trace!("nearest goal from {current}: {} at distance {d}", remaining[i]);
                Some(i)
            }
        }
    }
}
