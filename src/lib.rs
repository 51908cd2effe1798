//! Game of Life and Snake on a terminal grid.
//!
//! - `life` and `game` hold the two engines; neither does any I/O
//! - `input`, `render` and `modes` are the crossterm/ratatui front-ends

pub mod error;
pub mod game;
pub mod input;
pub mod life;
pub mod modes;
pub mod render;

pub use error::{GameError, GameOverReason};
