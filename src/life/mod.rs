//! Conway's Game of Life on a bounded or toroidal board.

pub mod cell;
pub mod config;
pub mod engine;
pub mod grid;

pub use cell::Cell;
pub use config::LifeConfig;
pub use engine::{LifeEngine, LIVE_PROBABILITY};
pub use grid::{Grid, GridError};
