//! **labyrinth-core** — core types for grid maze solving.
//!
//! This crate provides the foundational types used across the *labyrinth*
//! workspace: the [`Coord`] cell address and the [`Grid`] occupancy map that
//! every search strategy reads.

pub mod geom;
pub mod grid;

pub use geom::Coord;
pub use grid::{Grid, GridError};
