//! The [`Maze`] owner: one grid, its entrances, a solver and its results.

use labyrinth_core::{Coord, Grid};
use labyrinth_paths::{ConfigError, SolveError, Solver, Tour};
use rand::Rng;

use crate::entrances::{EntranceConfig, EntranceError, nearby, place_entrances};

/// A grid together with its entrances, an optional solver, and the tours of
/// the last successful solve.
///
/// The random generator is owned by the maze and only used for entrance
/// placement; seed it (e.g. `StdRng::seed_from_u64`) for reproducible runs.
pub struct Maze<R: Rng> {
    pub rng: R,
    grid: Grid,
    start: Option<Coord>,
    goals: Vec<Coord>,
    solver: Option<Solver>,
    solutions: Option<Vec<Tour>>,
}

impl<R: Rng> Maze<R> {
    /// Create a maze over `grid` with no entrances and no solver.
    pub fn new(grid: Grid, rng: R) -> Self {
        Self {
            rng,
            grid,
            start: None,
            goals: Vec::new(),
            solver: None,
            solutions: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Swap in a new grid. Entrances and solutions refer to the old grid and
    /// are cleared.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.start = None;
        self.goals.clear();
        self.solutions = None;
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn set_start(&mut self, start: Coord) {
        self.start = Some(start);
        self.solutions = None;
    }

    pub fn goals(&self) -> &[Coord] {
        &self.goals
    }

    pub fn set_goals(&mut self, goals: Vec<Coord>) {
        self.goals = goals;
        self.solutions = None;
    }

    pub fn solver(&self) -> Option<&Solver> {
        self.solver.as_ref()
    }

    pub fn set_solver(&mut self, solver: Solver) {
        self.solver = Some(solver);
    }

    /// Place goals, and a start if none is set, using the maze's own RNG.
    /// Previously placed goals are replaced.
    pub fn generate_entrances(&mut self, config: &EntranceConfig) -> Result<(), EntranceError> {
        let placed = place_entrances(&self.grid, self.start, config, &mut self.rng)?;
        self.start = Some(placed.start);
        self.goals = placed.goals;
        self.solutions = None;
        Ok(())
    }

    /// Open interior cells within `distance` orthogonal steps of `cell`.
    pub fn nearby(&self, cell: Coord, distance: i32) -> Vec<Coord> {
        nearby(&self.grid, cell, distance)
    }

    /// Run the configured solver from the start through every goal.
    pub fn solve(&mut self) -> Result<&[Tour], SolveError> {
        self.solutions = None;
        let start = self.start.ok_or(ConfigError::MissingStart)?;
        let solver = self.solver.as_mut().ok_or(ConfigError::NoSegmentSolver)?;
        let tours = solver.solve(&self.grid, start, &self.goals)?;
        Ok(self.solutions.insert(tours).as_slice())
    }

    /// Tours from the last successful solve.
    pub fn solutions(&self) -> Option<&[Tour]> {
        self.solutions.as_deref()
    }

    /// Tours from the last successful solve with loops and endpoints pruned.
    pub fn pruned_solutions(&self) -> Vec<Vec<Coord>> {
        self.solutions
            .iter()
            .flatten()
            .map(Tour::pruned)
            .collect()
    }

    /// Cells examined by the solver so far, or 0 without a solver.
    pub fn cost(&self) -> usize {
        self.solver.as_ref().map_or(0, Solver::cost)
    }
}
