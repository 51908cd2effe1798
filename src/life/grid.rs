//! Fixed-size life board stored row-major in a flat buffer.

use std::{fmt, str::FromStr};

use rand::Rng;
use thiserror::Error;

use super::cell::Cell;
use crate::error::{validate_dimensions, GameError};

/// Offsets of the eight surrounding cells as `(row, col)`, top-left first
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    Dimension(#[from] GameError),

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unexpected character {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        validate_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        })
    }

    /// Each cell independently live with probability `live_probability`
    pub fn random<R: Rng>(
        height: usize,
        width: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        validate_dimensions(height, width)?;
        let cells = (0..height * width)
            .map(|_| Cell::from(rng.gen_bool(live_probability)))
            .collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        validate_dimensions(height, width)?;

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell at `(row, col)`, `None` off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Overwrite one cell, returns false when `(row, col)` is off the board
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Coordinates of the eight neighbours of `(row, col)`.
    ///
    /// Without boundaries every coordinate is wrapped onto the torus. With
    /// boundaries the raw coordinates are returned and may lie off the board.
    pub fn neighbours(
        &self,
        row: usize,
        col: usize,
        boundaries: bool,
    ) -> impl Iterator<Item = (isize, isize)> {
        let (height, width) = (self.height as isize, self.width as isize);
        let (row, col) = (row as isize, col as isize);
        NEIGHBOUR_OFFSETS.iter().map(move |&(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            if boundaries {
                (r, c)
            } else {
                (r.rem_euclid(height), c.rem_euclid(width))
            }
        })
    }

    /// Live neighbours of `(row, col)`; off-board neighbours count as dead
    pub fn live_neighbours(&self, row: usize, col: usize, boundaries: bool) -> u8 {
        let (height, width) = (self.height as isize, self.width as isize);
        self.neighbours(row, col, boundaries)
            .filter(|&(r, c)| {
                (0..height).contains(&r)
                    && (0..width).contains(&c)
                    && self.cells[self.index(r as usize, c as usize)].is_live()
            })
            .count() as u8
    }

    /// The following generation, computed entirely from `self`
    pub fn next_generation(&self, boundaries: bool) -> Grid {
        let cells = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.next(self.live_neighbours(row, col, boundaries))
            })
            .collect();

        Grid {
            height: self.height,
            width: self.width,
            cells,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_live() { "*" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Parses one row per line; `*` or `#` is live, `.` is dead.
/// Blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        '*' | '#' => Ok(Cell::Live),
                        '.' => Ok(Cell::Dead),
                        found => Err(GridError::InvalidCell { row, col, found }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Grid::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Axis;
    use rand::{rngs::StdRng, SeedableRng};

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let g = grid("*..\n.*.\n..#\n");
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 3);
        assert_eq!(g.population(), 3);
        assert_eq!(g.get(2, 2), Some(Cell::Live));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.to_string(), "*..\n.*.\n..*");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "***\n**\n***".parse::<Grid>(),
            Err(GridError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            })
        );
        assert_eq!(
            "***\n*x*\n***".parse::<Grid>(),
            Err(GridError::InvalidCell {
                row: 1,
                col: 1,
                found: 'x'
            })
        );
        assert_eq!(
            "***\n***".parse::<Grid>(),
            Err(GridError::Dimension(GameError::InvalidDimension {
                axis: Axis::Height,
                size: 2
            }))
        );
    }

    #[test]
    fn test_set_cell() {
        let mut g = Grid::new(3, 4).unwrap();
        assert!(g.set(1, 3, Cell::Live));
        assert!(!g.set(3, 0, Cell::Live));
        assert_eq!(g.population(), 1);
        assert_eq!(g.rows().count(), 3);
    }

    #[test]
    fn test_random_respects_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Grid::random(4, 6, 0.2, &mut rng).unwrap();
        assert_eq!(g.rows().count(), 4);
        assert!(g.rows().all(|row| row.len() == 6));
        assert!(Grid::random(4, 2, 0.2, &mut rng).is_err());
    }

    #[test]
    fn test_neighbours_centre() {
        let g = Grid::new(3, 3).unwrap();
        let neighbours: Vec<_> = g.neighbours(1, 1, false).collect();
        assert_eq!(
            neighbours,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_neighbours_wrap_without_boundaries() {
        let g = Grid::new(3, 3).unwrap();
        let neighbours: Vec<_> = g.neighbours(0, 0, false).collect();
        assert_eq!(
            neighbours,
            vec![(2, 2), (2, 0), (2, 1), (0, 2), (0, 1), (1, 2), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_neighbours_unwrapped_with_boundaries() {
        let g = Grid::new(3, 3).unwrap();
        let neighbours: Vec<_> = g.neighbours(0, 0, true).collect();
        assert_eq!(
            neighbours,
            vec![(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_live_neighbours_by_mode() {
        let g = grid("***\n***\n***");
        assert_eq!(g.live_neighbours(1, 1, false), 8);
        assert_eq!(g.live_neighbours(1, 1, true), 8);
        assert_eq!(g.live_neighbours(0, 0, false), 8);
        assert_eq!(g.live_neighbours(0, 0, true), 3);
        assert_eq!(g.live_neighbours(0, 1, true), 5);
    }

    #[test]
    fn test_next_generation_reads_old_state() {
        // blinker on a 5x5 board
        let g = grid(".....\n..*..\n..*..\n..*..\n.....");
        let next = g.next_generation(true);
        assert_eq!(next.to_string(), ".....\n.....\n.***.\n.....\n.....");
        assert_eq!(next.next_generation(true), g);
    }
}
