use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use term_grids::game::SnakeConfig;
use term_grids::life::LifeConfig;
use term_grids::modes::{life, snake, LifeMode, SnakeMode};
use term_grids::render::board_size;

#[derive(Parser)]
#[command(name = "term_grids")]
#[command(version, about = "Game of Life and Snake in the terminal")]
struct Cli {
    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand)]
enum Game {
    /// Watch Conway's Game of Life evolve
    Life(BoardArgs),
    /// Play snake with WASD or the arrow keys
    Snake(BoardArgs),
}

#[derive(Args)]
struct BoardArgs {
    /// Board width, defaults to the terminal width
    #[arg(long)]
    width: Option<usize>,

    /// Board height, defaults to the terminal height
    #[arg(long)]
    height: Option<usize>,

    /// Start with wrap-around edges instead of hard boundaries
    #[arg(long)]
    wrap: bool,

    /// Milliseconds between ticks
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,
}

impl BoardArgs {
    /// `(width, height)`, filling the terminal where not given
    fn board_size(&self) -> Result<(usize, usize)> {
        let (columns, rows) =
            crossterm::terminal::size().context("Failed to read terminal size")?;
        let (fit_width, fit_height) = board_size(columns, rows);
        Ok((
            self.width.unwrap_or(fit_width),
            self.height.unwrap_or(fit_height),
        ))
    }

    fn tick_interval(&self, default: Duration) -> Duration {
        self.tick_ms.map(Duration::from_millis).unwrap_or(default)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.game {
        Game::Life(args) => {
            let (width, height) = args.board_size()?;
            let config = LifeConfig::new(width, height).with_boundaries(!args.wrap);
            debug!("life config: {:?}", config);
            let mut mode = LifeMode::new(config, args.tick_interval(life::DEFAULT_TICK))?;
            mode.run().await?;
        }
        Game::Snake(args) => {
            let (width, height) = args.board_size()?;
            let config = SnakeConfig::new(width, height).with_boundaries(!args.wrap);
            debug!("snake config: {:?}", config);
            let mut mode = SnakeMode::new(config, args.tick_interval(snake::DEFAULT_TICK))?;
            mode.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Cli::try_parse_from(["term_grids", "life", "--tick-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["term_grids", "snake", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn test_tick_override() {
        let cli = Cli::try_parse_from(["term_grids", "snake", "--tick-ms", "50"]).unwrap();
        let Game::Snake(args) = cli.game else {
            panic!("expected snake subcommand");
        };
        assert_eq!(
            args.tick_interval(snake::DEFAULT_TICK),
            Duration::from_millis(50)
        );
    }
}
