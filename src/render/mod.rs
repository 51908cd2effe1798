//! ratatui drawing for both games.
//!
//! Every screen has the same frame: a one-line status bar on top, the board
//! inside a border, and a one-line controls bar at the bottom.

pub mod life;
pub mod snake;

pub use life::LifeRenderer;
pub use snake::SnakeRenderer;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
};

/// Rows taken by the status bar, the two borders and the controls bar
pub const CHROME_ROWS: u16 = 4;
/// Columns taken by the two side borders
pub const CHROME_COLUMNS: u16 = 2;

/// Largest `(width, height)` board that fits a terminal of the given size
pub fn board_size(columns: u16, rows: u16) -> (usize, usize) {
    (
        columns.saturating_sub(CHROME_COLUMNS) as usize,
        rows.saturating_sub(CHROME_ROWS) as usize,
    )
}

/// Split the frame into status bar, board and controls bar
fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Bottom bar listing `keys` followed by the boundary toggle and its state
fn controls_line(keys: &[(&str, &str)], boundaries: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (label, key) in keys {
        spans.push(Span::raw(format!("{label}: ")));
        spans.push(Span::styled(format!("\"{key}\""), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(", "));
    }
    spans.push(Span::raw("Toggle boundaries: "));
    spans.push(Span::styled("\"B\"", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw(if boundaries { " (on)" } else { " (off)" }));
    Line::from(spans)
}

#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
