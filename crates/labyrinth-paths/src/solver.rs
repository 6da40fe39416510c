//! Multi-goal tours: routing plus segment concatenation.

use labyrinth_core::Coord;
use log::{debug, warn};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::error::{ConfigError, SolveError};
use crate::greedy::Greedy;
use crate::prune::prune;
use crate::router::RouterKind;
use crate::traits::{Pather, Router, SegmentSolver};

// ---------------------------------------------------------------------------
// Strategy and configuration
// ---------------------------------------------------------------------------

/// The four built-in search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    Bfs,
    Dfs,
    Greedy,
    AStar,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 4] = [Self::Bfs, Self::Dfs, Self::Greedy, Self::AStar];

    /// The segment search this strategy runs.
    pub fn segment_solver(self) -> Box<dyn SegmentSolver> {
        match self {
            Self::Bfs => Box::new(Bfs),
            Self::Dfs => Box::new(Dfs),
            Self::Greedy => Box::new(Greedy),
            Self::AStar => Box::new(AStar),
        }
    }

    /// The router this strategy pairs with unless told otherwise.
    pub fn router(self) -> RouterKind {
        match self {
            Self::Bfs | Self::Dfs => RouterKind::FixedOrder,
            Self::Greedy | Self::AStar => RouterKind::NearestGoal,
        }
    }
}

/// Declarative solver settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Segment search to use. Required.
    pub strategy: Option<Strategy>,
    /// Router override; defaults to the strategy's own router.
    pub router: Option<RouterKind>,
    /// Cap on cells examined per segment.
    pub max_explored: Option<usize>,
}

/// Programmatic construction of a [`Solver`], including custom segment
/// searches and routers.
#[derive(Default)]
pub struct SolverBuilder {
    segment: Option<Box<dyn SegmentSolver>>,
    router: Option<Box<dyn Router>>,
    max_explored: Option<usize>,
}

impl SolverBuilder {
    /// Use a built-in strategy. Its router is used unless [`router`] is also
    /// called.
    ///
    /// [`router`]: SolverBuilder::router
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.segment = Some(strategy.segment_solver());
        if self.router.is_none() {
            self.router = Some(Box::new(strategy.router()));
        }
        self
    }

    /// Use a custom segment search.
    pub fn segment_solver(mut self, segment: impl SegmentSolver + 'static) -> Self {
        self.segment = Some(Box::new(segment));
        self
    }

    /// Use a custom router.
    pub fn router(mut self, router: impl Router + 'static) -> Self {
        self.router = Some(Box::new(router));
        self
    }

    /// Cap the number of cells examined per segment.
    pub fn max_explored(mut self, limit: usize) -> Self {
        self.max_explored = Some(limit);
        self
    }

    /// Finish construction. Fails if no segment search was configured.
    pub fn build(self) -> Result<Solver, SolveError> {
        let segment = self.segment.ok_or(ConfigError::NoSegmentSolver)?;
        Ok(Solver {
            segment,
            router: self.router.unwrap_or_else(|| Box::new(RouterKind::FixedOrder)),
            max_explored: self.max_explored,
            cost: 0,
        })
    }
}

// ---------------------------------------------------------------------------
// Tour
// ---------------------------------------------------------------------------

/// One complete walk from the start through every goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Inclusive walk; consecutive segments share their joining cell once.
    pub path: Vec<Coord>,
    /// Goals in the order they were reached.
    pub visits: Vec<Coord>,
    /// Cells examined while building this tour.
    pub explored: usize,
}

impl Tour {
    /// First coordinate of the walk.
    pub fn start(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    /// Last coordinate of the walk.
    pub fn end(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// Number of coordinates in the walk.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The walk with loops collapsed and its own endpoints stripped.
    pub fn pruned(&self) -> Vec<Coord> {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => prune(&self.path, start, end),
            _ => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Multi-goal solver: pairs one segment search with one router.
///
/// The exploration counter accumulates across every `solve` call on the same
/// instance until [`reset_cost`](Solver::reset_cost) is called. A `Solver` is
/// meant to be driven from a single thread.
pub struct Solver {
    segment: Box<dyn SegmentSolver>,
    router: Box<dyn Router>,
    max_explored: Option<usize>,
    cost: usize,
}

impl Solver {
    /// A solver running `strategy` with its canonical router.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            segment: strategy.segment_solver(),
            router: Box::new(strategy.router()),
            max_explored: None,
            cost: 0,
        }
    }

    /// Start building a solver.
    pub fn builder() -> SolverBuilder {
        SolverBuilder::default()
    }

    /// Build a solver from declarative settings.
    pub fn from_config(config: &SolverConfig) -> Result<Self, SolveError> {
        let strategy = config.strategy.ok_or(ConfigError::NoSegmentSolver)?;
        let mut builder = Self::builder();
        if let Some(router) = config.router {
            builder = builder.router(router);
        }
        builder = builder.strategy(strategy);
        if let Some(limit) = config.max_explored {
            builder = builder.max_explored(limit);
        }
        builder.build()
    }

    /// Name of the segment search in use.
    pub fn segment_name(&self) -> &'static str {
        self.segment.name()
    }

    /// Name of the router in use.
    pub fn router_name(&self) -> &'static str {
        self.router.name()
    }

    /// Total cells examined so far.
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Zero the exploration counter.
    pub fn reset_cost(&mut self) {
        self.cost = 0;
    }

    /// Build a tour from `start` through every goal.
    ///
    /// Returns exactly one tour. Work done by a segment that fails is still
    /// added to [`cost`](Solver::cost) before the error is returned.
    pub fn solve(
        &mut self,
        pather: &dyn Pather,
        start: Coord,
        goals: &[Coord],
    ) -> Result<Vec<Tour>, SolveError> {
        validate(pather, start, goals)?;

        let mut remaining = goals.to_vec();
        let mut current = start;
        let mut path = Vec::new();
        let mut visits = Vec::with_capacity(goals.len());
        let mut explored = 0;

        while !remaining.is_empty() {
            let Some(i) = self
                .router
                .next_goal(current, &remaining)
                .filter(|&i| i < remaining.len())
            else {
                return Err(ConfigError::RouterFailed {
                    remaining: remaining.len(),
                }
                .into());
            };
            let goal = remaining.remove(i);

            let segment = match self
                .segment
                .solve_segment(pather, current, goal, self.max_explored)
            {
                Ok(segment) => segment,
                Err(err) => {
                    self.cost += err.explored();
                    warn!("{} segment {current} -> {goal} failed: {err}", self.segment.name());
                    return Err(err);
                }
            };

            self.cost += segment.explored;
            explored += segment.explored;
            debug!(
                "{} segment {current} -> {goal}: {} steps, {} explored",
                self.segment.name(),
                segment.steps(),
                segment.explored
            );

            let mut walk = segment.path;
            // The goal is re-added as the first cell of the next segment.
            walk.pop();
            path.extend(walk);
            visits.push(goal);
            current = goal;
        }
        path.push(current);

        debug!(
            "{}/{} tour from {start}: {} goals, {} cells, {} explored (total {})",
            self.segment.name(),
            self.router.name(),
            visits.len(),
            path.len(),
            explored,
            self.cost
        );

        Ok(vec![Tour {
            path,
            visits,
            explored,
        }])
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("segment", &self.segment.name())
            .field("router", &self.router.name())
            .field("max_explored", &self.max_explored)
            .field("cost", &self.cost)
            .finish()
    }
}

/// Reject malformed requests before any search starts.
fn validate(pather: &dyn Pather, start: Coord, goals: &[Coord]) -> Result<(), SolveError> {
    if goals.is_empty() {
        return Err(ConfigError::NoGoals.into());
    }
    if !pather.contains(start) {
        return Err(ConfigError::OutOfBounds(start).into());
    }
    // The start may sit on the boundary ring, but never on a wall.
    if pather.is_wall(start) {
        return Err(ConfigError::StartIsWall(start).into());
    }
    for &goal in goals {
        if !pather.contains(goal) {
            return Err(ConfigError::OutOfBounds(goal).into());
        }
        if goal == start {
            return Err(ConfigError::GoalIsStart(goal).into());
        }
    }
    // A goal no search may step onto can never be discovered.
    if let Some(&goal) = goals.iter().find(|&&g| !pather.passable(g)) {
        warn!("goal {goal} is a wall or on the boundary ring");
        return Err(SolveError::UnreachableGoal {
            from: start,
            to: goal,
            explored: 0,
        });
    }
    Ok(())
}
