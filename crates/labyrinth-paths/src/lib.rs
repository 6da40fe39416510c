//! Multi-goal pathfinding on occupancy grids.
//!
//! This crate provides interchangeable segment searches and goal routers:
//!
//! - **BFS** shortest walks ([`Bfs`])
//! - **DFS** first-found walks ([`Dfs`])
//! - **Greedy** nearest-goal touring over breadth-first segments ([`Greedy`])
//! - **A\*** with the Manhattan heuristic ([`AStar`])
//!
//! A [`Solver`] pairs any [`SegmentSolver`] with any [`Router`] and
//! concatenates the per-segment walks into one [`Tour`], counting every cell
//! examined. [`prune`] collapses revisit loops out of a raw walk.
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | Read-only grid adjacency (implemented for [`labyrinth_core::Grid`]) |
//! | [`SegmentSolver`] | One start → goal search |
//! | [`Router`] | Which remaining goal comes next |

mod astar;
mod bfs;
mod dfs;
mod distance;
mod error;
mod greedy;
mod neighbors;
mod prune;
mod router;
mod segment;
mod solver;
mod table;
mod traits;

#[cfg(test)]
mod fixtures;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use distance::manhattan;
pub use error::{ConfigError, SolveError};
pub use greedy::Greedy;
pub use neighbors::Neighbors;
pub use prune::prune;
pub use router::RouterKind;
pub use segment::Segment;
pub use solver::{Solver, SolverBuilder, SolverConfig, Strategy, Tour};
pub use traits::{Pather, Router, SegmentSolver};
