//! Interactive terminal front-ends driving the engines on a timer.

pub mod life;
pub mod snake;

pub use life::LifeMode;
pub use snake::SnakeMode;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;
use ratatui::{backend::CrosstermBackend, Terminal};

/// The TUI draws on stdout so stderr stays free for the logger
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen, hidden cursor
pub fn enter_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Undo [`enter_terminal`]
pub fn leave_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Restore the terminal after a game loop. A loop error wins over a teardown
/// error; the teardown error is logged either way.
pub fn finish(terminal: &mut Tui, result: Result<()>) -> Result<()> {
    keep_loop_error(result, leave_terminal(terminal))
}

fn keep_loop_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &restored {
        error!("failed to restore terminal: {err:#}");
    }
    result.and(restored)
}

/// `tokio::time::interval` panics on a zero period
fn check_tick_interval(tick_interval: Duration) -> Result<()> {
    ensure!(!tick_interval.is_zero(), "tick interval must be non-zero");
    Ok(())
}
