//! **labyrinth-maze** — the owner side of maze solving.
//!
//! - [`Maze`]: holds a grid, its start and goals, a [`Solver`](labyrinth_paths::Solver)
//!   and the tours it produced.
//! - [`place_entrances`]: seeded placement of start and goal cells.

pub mod entrances;
pub mod maze;

pub use entrances::{EntranceConfig, EntranceError, Entrances, nearby, place_entrances};
pub use maze::Maze;
