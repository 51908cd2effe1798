use std::fmt;

use thiserror::Error;

/// Smallest allowed grid side for both games
pub const MIN_SIZE: usize = 3;

/// Grid axis named in dimension errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Height,
    Width,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Height => f.write_str("height"),
            Axis::Width => f.write_str("width"),
        }
    }
}

/// Why a snake game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Head left the board while boundaries are on
    WallHit,
    /// Head landed on another segment
    BodyHit,
    /// Snake fills the board, no free cell for fruit
    NoSpaceForFruit,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::WallHit => f.write_str("wall hit"),
            GameOverReason::BodyHit => f.write_str("body hit"),
            GameOverReason::NoSpaceForFruit => f.write_str("nowhere to place fruit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{axis} of size {size} is too small, minimal value is {}", MIN_SIZE)]
    InvalidDimension { axis: Axis, size: usize },

    #[error("game over: {0}")]
    GameOver(GameOverReason),
}

/// Check both sides of a grid against [`MIN_SIZE`], height first.
pub fn validate_dimensions(height: usize, width: usize) -> Result<(), GameError> {
    if height < MIN_SIZE {
        return Err(GameError::InvalidDimension {
            axis: Axis::Height,
            size: height,
        });
    }
    if width < MIN_SIZE {
        return Err(GameError::InvalidDimension {
            axis: Axis::Width,
            size: width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert!(validate_dimensions(3, 3).is_ok());
        assert_eq!(
            validate_dimensions(2, 10),
            Err(GameError::InvalidDimension {
                axis: Axis::Height,
                size: 2
            })
        );
        assert_eq!(
            validate_dimensions(10, 0),
            Err(GameError::InvalidDimension {
                axis: Axis::Width,
                size: 0
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidDimension {
            axis: Axis::Width,
            size: 1,
        };
        assert_eq!(
            err.to_string(),
            "width of size 1 is too small, minimal value is 3"
        );
        assert_eq!(
            GameError::GameOver(GameOverReason::BodyHit).to_string(),
            "game over: body hit"
        );
    }
}
