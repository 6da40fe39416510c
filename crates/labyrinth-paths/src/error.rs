use labyrinth_core::Coord;
use thiserror::Error;

/// Reasons a solver refuses to start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no start position set")]
    MissingStart,
    #[error("goal list is empty")]
    NoGoals,
    #[error("no segment solver configured")]
    NoSegmentSolver,
    #[error("goal {0} coincides with the start")]
    GoalIsStart(Coord),
    #[error("{0} lies outside the grid")]
    OutOfBounds(Coord),
    #[error("start {0} is a wall")]
    StartIsWall(Coord),
    #[error("router picked no goal with {remaining} goals remaining")]
    RouterFailed { remaining: usize },
}

/// Errors returned by segment searches and multi-goal solves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The frontier emptied without discovering the goal.
    #[error("goal {to} is unreachable from {from} ({explored} cells explored)")]
    UnreachableGoal {
        from: Coord,
        to: Coord,
        explored: usize,
    },
    /// The per-segment exploration cap was hit before the goal was found.
    #[error("exploration limit of {limit} cells reached searching {from} -> {to}")]
    ExplorationLimit { from: Coord, to: Coord, limit: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

impl SolveError {
    /// Number of cells examined before the failure was detected.
    pub fn explored(&self) -> usize {
        match self {
            Self::UnreachableGoal { explored, .. } => *explored,
            Self::ExplorationLimit { limit, .. } => *limit,
            Self::InvalidConfiguration(_) => 0,
        }
    }
}
