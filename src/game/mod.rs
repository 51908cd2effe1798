//! Snake rules without any I/O or rendering dependencies.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

pub use config::SnakeConfig;
pub use direction::Direction;
pub use engine::{SnakeEngine, SCORE_INCREMENT};
pub use state::{Position, Snake};
