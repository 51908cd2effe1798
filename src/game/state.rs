use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the snake board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One step away in `direction`, not wrapped
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_in_bounds(&self, width: usize, height: usize) -> bool {
        (0..width as i32).contains(&self.x) && (0..height as i32).contains(&self.y)
    }

    /// Bring a position that is at most one step outside the board back in
    /// through the opposite edge. Each axis wraps on its own.
    pub fn wrapped(&self, width: usize, height: usize) -> Self {
        let (width, height) = (width as i32, height as i32);
        let wrap = |v: i32, dim: i32| {
            if v < 0 {
                dim - 1
            } else if v >= dim {
                0
            } else {
                v
            }
        };
        Self {
            x: wrap(self.x, width),
            y: wrap(self.y, height),
        }
    }
}

/// The snake body and facing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    /// A single-segment snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Change facing unless `direction` would reverse the snake onto itself.
    /// Returns whether the facing changed.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
