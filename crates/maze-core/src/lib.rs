//! **maze-core** — grid model for obstacle mazes.
//!
//! This crate provides the value types shared by the generator and the
//! search engine: [`Position`], [`Bounds`], [`CellState`] and the owned
//! [`Grid`]. It knows nothing about randomness, searching or drawing.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, BoundsIter, Position};
pub use grid::{CellState, Grid};
