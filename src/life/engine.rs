use log::{debug, trace};
use rand::{rngs::ThreadRng, Rng};

use super::{config::LifeConfig, grid::Grid};
use crate::error::GameError;

/// Chance of a cell starting live when the board is seeded
pub const LIVE_PROBABILITY: f64 = 0.2;

/// Game of Life board with a switchable edge mode.
///
/// `boundaries == false` makes the board a torus. `boundaries == true` keeps
/// the edges hard: neighbours past them simply do not count.
#[derive(Debug, Clone)]
pub struct LifeEngine<R = ThreadRng> {
    grid: Grid,
    boundaries: bool,
    rng: R,
}

impl LifeEngine<ThreadRng> {
    /// Create a randomly seeded engine using the thread-local random source
    pub fn new(config: LifeConfig) -> Result<Self, GameError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> LifeEngine<R> {
    /// Create a randomly seeded engine drawing from `rng`
    pub fn with_rng(config: LifeConfig, mut rng: R) -> Result<Self, GameError> {
        let grid = Self::seed(config.height, config.width, &mut rng)?;
        Ok(Self {
            grid,
            boundaries: config.boundaries,
            rng,
        })
    }

    /// Start from a known generation; `rng` is only used by [`reset`](Self::reset)
    pub fn with_grid(grid: Grid, boundaries: bool, rng: R) -> Self {
        Self {
            grid,
            boundaries,
            rng,
        }
    }

    /// Draw random boards until one has at least one live cell
    fn seed(height: usize, width: usize, rng: &mut R) -> Result<Grid, GameError> {
        let mut attempts = 1;
        loop {
            let grid = Grid::random(height, width, LIVE_PROBABILITY, rng)?;
            let population = grid.population();
            if population > 0 {
                debug!(
                    "seeded {}x{} board with {} live cells after {} draw(s)",
                    height, width, population, attempts
                );
                return Ok(grid);
            }
            attempts += 1;
        }
    }

    /// Replace the board with a fresh random, non-empty one
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.grid = Self::seed(self.grid.height(), self.grid.width(), &mut self.rng)?;
        Ok(())
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        self.grid = self.grid.next_generation(self.boundaries);
        trace!("generation advanced, population {}", self.grid.population());
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Live cells on the current board, counted on every call
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn boundaries(&self) -> bool {
        self.boundaries
    }

    pub fn set_boundaries(&mut self, boundaries: bool) {
        self.boundaries = boundaries;
    }

    pub fn toggle_boundaries(&mut self) {
        self.boundaries = !self.boundaries;
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Axis;
    use crate::life::Cell;
    use rand::{rngs::StdRng, SeedableRng};

    const RNG_SEED: u64 = 0x11FE;

    fn engine_with(text: &str, boundaries: bool) -> LifeEngine<StdRng> {
        LifeEngine::with_grid(
            text.parse().unwrap(),
            boundaries,
            StdRng::seed_from_u64(RNG_SEED),
        )
    }

    fn centre_after_tick(text: &str) -> Cell {
        let mut engine = engine_with(text, false);
        engine.tick();
        engine.grid().get(1, 1).unwrap()
    }

    #[test]
    fn test_construction_validates_dimensions() {
        for height in 3..8 {
            for width in 3..8 {
                let engine = LifeEngine::with_rng(
                    LifeConfig::new(width, height),
                    StdRng::seed_from_u64(RNG_SEED),
                )
                .unwrap();
                assert_eq!(engine.height(), height);
                assert_eq!(engine.width(), width);
                assert!(engine.population() > 0);
            }
        }

        assert_eq!(
            LifeEngine::new(LifeConfig::new(10, 2)).unwrap_err(),
            GameError::InvalidDimension {
                axis: Axis::Height,
                size: 2
            }
        );
        assert_eq!(
            LifeEngine::new(LifeConfig::new(2, 10)).unwrap_err(),
            GameError::InvalidDimension {
                axis: Axis::Width,
                size: 2
            }
        );
    }

    #[test]
    fn test_populated_on_start_and_reset() {
        let mut engine = LifeEngine::with_rng(
            LifeConfig::new(3, 3),
            StdRng::seed_from_u64(RNG_SEED),
        )
        .unwrap();
        for _ in 0..20 {
            assert!(engine.population() > 0);
            engine.reset().unwrap();
        }
    }

    #[test]
    fn test_reset_keeps_dimensions_and_mode() {
        let mut engine = engine_with("...\n...\n...\n...", true);
        assert_eq!(engine.population(), 0);
        engine.reset().unwrap();
        assert!(engine.population() > 0);
        assert_eq!(engine.height(), 4);
        assert_eq!(engine.width(), 3);
        assert!(engine.boundaries());
    }

    #[test]
    fn test_single_cell_dies() {
        let mut engine = engine_with("...\n.*.\n...", false);
        engine.tick();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_underpopulation() {
        for fixture in ["...\n.*.\n...", "*..\n.*.\n..."] {
            assert_eq!(centre_after_tick(fixture), Cell::Dead, "{fixture}");
        }
    }

    #[test]
    fn test_overpopulation() {
        let fixtures = [
            "**.\n.*.\n.**",
            "**.\n**.\n.**",
            "**.\n**.\n***",
            "**.\n***\n***",
            "***\n***\n***",
        ];
        for fixture in fixtures {
            assert_eq!(centre_after_tick(fixture), Cell::Dead, "{fixture}");
        }
    }

    #[test]
    fn test_survival() {
        for fixture in ["*..\n.*.\n..*", ".*.\n***\n..."] {
            assert_eq!(centre_after_tick(fixture), Cell::Live, "{fixture}");
        }
    }

    #[test]
    fn test_birth() {
        for fixture in ["*.*\n...\n..*", "...\n*.*\n.*."] {
            assert_eq!(centre_after_tick(fixture), Cell::Live, "{fixture}");
        }
    }

    #[test]
    fn test_full_board_by_mode() {
        let mut wrapped = engine_with("***\n***\n***", false);
        wrapped.tick();
        assert_eq!(wrapped.population(), 0);

        // corners see 3 neighbours, edges 5, the centre 8
        let mut walled = engine_with("***\n***\n***", true);
        walled.tick();
        assert_eq!(walled.grid().to_string(), "*.*\n...\n*.*");
    }

    #[test]
    fn test_boundaries_change_edge_cells() {
        let mut wrapped = engine_with("..*\n..*\n..*", false);
        wrapped.tick();
        assert_eq!(wrapped.grid().get(1, 0), Some(Cell::Live));

        let mut walled = engine_with("..*\n..*\n..*", true);
        walled.tick();
        assert_eq!(walled.grid().get(1, 0), Some(Cell::Dead));
    }

    #[test]
    fn test_toggle_applies_on_next_tick() {
        let mut engine = engine_with("..*\n..*\n..*", true);
        engine.toggle_boundaries();
        assert!(!engine.boundaries());
        engine.tick();
        assert_eq!(engine.grid().get(1, 0), Some(Cell::Live));

        engine.set_boundaries(true);
        assert!(engine.boundaries());
    }

    #[test]
    fn test_tick_is_deterministic() {
        for boundaries in [false, true] {
            let mut engine = LifeEngine::with_rng(
                LifeConfig::new(12, 9).with_boundaries(boundaries),
                StdRng::seed_from_u64(RNG_SEED),
            )
            .unwrap();
            let saved = engine.grid().clone();

            engine.tick();
            let mut replay =
                LifeEngine::with_grid(saved, boundaries, StdRng::seed_from_u64(0));
            replay.tick();
            assert_eq!(engine.grid(), replay.grid());
        }
    }
}
