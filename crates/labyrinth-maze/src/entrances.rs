//! Seeded placement of a start cell and goal cells.
//!
//! Entrances are drawn from the interior lattice `1, 1 + spacing, ...` on both
//! axes, so with the default spacing of 2 they land on the odd cells that
//! corridor-carving generators keep open. All randomness comes from the `Rng`
//! the caller passes in.

use std::collections::HashSet;

use labyrinth_core::{Coord, Grid};
use labyrinth_paths::Pather;
use log::debug;
use rand::Rng;
use thiserror::Error;

/// How many entrances to place and how far apart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EntranceConfig {
    /// Number of goal cells.
    pub goals: usize,
    /// Lattice step, and the orthogonal exclusion radius around each entrance.
    pub spacing: i32,
    /// Random draws allowed per entrance before giving up.
    pub max_attempts: u32,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            goals: 3,
            spacing: 2,
            max_attempts: 20,
        }
    }
}

/// Errors from entrance placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntranceError {
    #[error("entrance spacing must be at least 1, got {0}")]
    InvalidSpacing(i32),
    #[error("no open interior cell found for the start")]
    NoOpenCell,
    #[error("placed {placed} of {requested} goals before running out of attempts")]
    Exhausted { placed: usize, requested: usize },
}

/// A start and its goals, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entrances {
    pub start: Coord,
    pub goals: Vec<Coord>,
}

/// Open interior cells within `distance` orthogonal steps of `cell`.
///
/// Each ring is listed south, north, east, west before moving one step
/// further out.
pub fn nearby(grid: &Grid, cell: Coord, distance: i32) -> Vec<Coord> {
    let mut out = Vec::new();
    for i in 1..=distance {
        for c in [
            cell.shift(i, 0),
            cell.shift(-i, 0),
            cell.shift(0, i),
            cell.shift(0, -i),
        ] {
            if grid.passable(c) {
                out.push(c);
            }
        }
    }
    out
}

/// Place `config.goals` goals, and a start unless one is given.
///
/// No entrance lands on another entrance or within `config.spacing` open
/// steps of one along a row or column.
pub fn place_entrances<R: Rng>(
    grid: &Grid,
    start: Option<Coord>,
    config: &EntranceConfig,
    rng: &mut R,
) -> Result<Entrances, EntranceError> {
    if config.spacing < 1 {
        return Err(EntranceError::InvalidSpacing(config.spacing));
    }
    let lattice = Lattice::new(grid, config.spacing);

    let start = match start {
        Some(start) => start,
        None => (0..config.max_attempts)
            .filter_map(|_| lattice.sample(rng))
            .find(|&c| grid.passable(c))
            .ok_or(EntranceError::NoOpenCell)?,
    };

    let mut used: HashSet<Coord> = HashSet::from([start]);
    used.extend(nearby(grid, start, config.spacing));

    let mut goals = Vec::with_capacity(config.goals);
    for _ in 0..config.goals {
        let goal = (0..config.max_attempts)
            .filter_map(|_| lattice.sample(rng))
            .find(|c| grid.passable(*c) && !used.contains(c))
            .ok_or(EntranceError::Exhausted {
                placed: goals.len(),
                requested: config.goals,
            })?;
        used.insert(goal);
        used.extend(nearby(grid, goal, config.spacing));
        goals.push(goal);
    }

    debug!("placed start {start} and {} goals", goals.len());
    Ok(Entrances { start, goals })
}

/// Interior cells reachable as `1 + k * spacing` on both axes.
struct Lattice {
    rows: i32,
    cols: i32,
    spacing: i32,
}

impl Lattice {
    fn new(grid: &Grid, spacing: i32) -> Self {
        let steps = |len: usize| {
            let last = len as i32 - 2;
            if last < 1 { 0 } else { (last - 1) / spacing + 1 }
        };
        Self {
            rows: steps(grid.height()),
            cols: steps(grid.width()),
            spacing,
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Option<Coord> {
        if self.rows == 0 || self.cols == 0 {
            return None;
        }
        Some(Coord::new(
            1 + self.spacing * rng.random_range(0..self.rows),
            1 + self.spacing * rng.random_range(0..self.cols),
        ))
    }
}
