use log::{debug, trace};
use rand::{rngs::ThreadRng, Rng};

use super::{
    config::SnakeConfig,
    direction::Direction,
    state::{Position, Snake},
};
use crate::error::{validate_dimensions, GameError, GameOverReason};

/// Points added for every fruit eaten
pub const SCORE_INCREMENT: u32 = 1;

/// Snake game state and rules.
///
/// The engine owns the board exclusively. A renderer reads it through the
/// accessors and drives it with [`tick`](Self::tick), [`reset`](Self::reset),
/// [`set_direction`](Self::set_direction) and the boundary toggles.
#[derive(Debug, Clone)]
pub struct SnakeEngine<R = ThreadRng> {
    config: SnakeConfig,
    snake: Snake,
    fruit: Option<Position>,
    score: u32,
    rng: R,
}

impl SnakeEngine<ThreadRng> {
    /// Create an engine seeded from the thread-local random source
    pub fn new(config: SnakeConfig) -> Result<Self, GameError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> SnakeEngine<R> {
    /// Create an engine drawing fruit positions from `rng`
    pub fn with_rng(config: SnakeConfig, rng: R) -> Result<Self, GameError> {
        validate_dimensions(config.height, config.width)?;

        let mut engine = Self {
            snake: Self::initial_snake(&config),
            fruit: None,
            score: 0,
            config,
            rng,
        };
        engine.place_fruit()?;
        Ok(engine)
    }

    fn initial_snake(config: &SnakeConfig) -> Snake {
        let center_x = (config.width / 2) as i32;
        let center_y = (config.height / 2) as i32;
        Snake::new(Position::new(center_x, center_y), Direction::Right)
    }

    /// Back to a centered single segment facing right with a fresh fruit and
    /// no score. The boundary mode is kept.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.snake = Self::initial_snake(&self.config);
        self.score = 0;
        self.fruit = None;
        self.place_fruit()?;
        debug!("snake reset, fruit at {:?}", self.fruit);
        Ok(())
    }

    /// Advance the snake by one cell.
    ///
    /// A wall hit leaves the state untouched. A body hit keeps the new head,
    /// and running out of room for fruit happens after the fruit was scored.
    pub fn tick(&mut self) -> Result<(), GameError> {
        let (width, height) = (self.config.width, self.config.height);
        let next = self.snake.head().moved_in_direction(self.snake.direction);

        if self.config.boundaries && !next.is_in_bounds(width, height) {
            return Err(GameError::GameOver(GameOverReason::WallHit));
        }

        let head = next.wrapped(width, height);
        self.snake.push_head(head);
        trace!("head moved to ({}, {})", head.x, head.y);

        if self.snake.collides_with_body(head) {
            return Err(GameError::GameOver(GameOverReason::BodyHit));
        }

        if self.fruit == Some(head) {
            self.score += SCORE_INCREMENT;
            self.place_fruit()?;
        } else {
            self.snake.drop_tail();
        }

        Ok(())
    }

    /// Rejection sampling over `[0, width] x [0, height]`. The inclusive upper
    /// bound is kept, samples off the board or on the snake are redrawn.
    fn place_fruit(&mut self) -> Result<(), GameError> {
        let (width, height) = (self.config.width, self.config.height);
        if self.snake.len() >= width * height {
            return Err(GameError::GameOver(GameOverReason::NoSpaceForFruit));
        }

        loop {
            let candidate = Position::new(
                self.rng.gen_range(0..=width as i32),
                self.rng.gen_range(0..=height as i32),
            );
            if candidate.is_in_bounds(width, height) && !self.snake.occupies(candidate) {
                debug!("fruit placed at ({}, {})", candidate.x, candidate.y);
                self.fruit = Some(candidate);
                return Ok(());
            }
        }
    }

    /// Turn the snake; a request for the exact reverse is ignored
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.snake.turn(direction) {
            trace!("ignored reversal from {:?} to {:?}", self.snake.direction, direction);
        }
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Segments with the head first
    pub fn segments(&self) -> &[Position] {
        &self.snake.body
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn fruit(&self) -> Option<Position> {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn boundaries(&self) -> bool {
        self.config.boundaries
    }

    pub fn set_boundaries(&mut self, boundaries: bool) {
        self.config.boundaries = boundaries;
    }

    pub fn toggle_boundaries(&mut self) {
        self.config.boundaries = !self.config.boundaries;
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }
}
