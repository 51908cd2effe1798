use serde::{Deserialize, Serialize};

/// State of one life cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Live,
}

impl Cell {
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }

    /// Conway's rule: a live cell survives with 2 or 3 live neighbours, a
    /// dead cell is born with exactly 3.
    pub fn next(self, live_neighbours: u8) -> Cell {
        match (self, live_neighbours) {
            (Cell::Live, n) if !(2..=3).contains(&n) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Live,
            (cell, _) => cell,
        }
    }
}

impl From<bool> for Cell {
    fn from(live: bool) -> Self {
        if live {
            Cell::Live
        } else {
            Cell::Dead
        }
    }
}
