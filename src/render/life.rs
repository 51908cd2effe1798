use rand::Rng;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{controls_line, split};
use crate::life::{Grid, LifeEngine};

const LIVE_SYMBOL: char = '*';
const DEAD_SYMBOL: char = ' ';

/// Draws a [`LifeEngine`] snapshot
#[derive(Debug, Default)]
pub struct LifeRenderer {
    /// Digits shown last frame, so a shrinking count stays right-aligned
    population_width: usize,
}

impl LifeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<R: Rng>(&mut self, frame: &mut Frame, engine: &LifeEngine<R>) {
        let (status, board, controls) = split(frame.area());

        frame.render_widget(self.render_population(engine.population()), status);
        frame.render_widget(Self::render_grid(engine.grid()), board);
        frame.render_widget(
            Paragraph::new(controls_line(
                &[("Exit", "Q"), ("Restart", "R")],
                engine.boundaries(),
            )),
            controls,
        );
    }

    fn render_population(&mut self, population: usize) -> Paragraph<'static> {
        let digits = population.to_string();
        let width = self.population_width.max(digits.len());
        self.population_width = digits.len();

        Paragraph::new(Line::from(vec![
            Span::styled("Population: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{digits:>width$}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
    }

    fn render_grid(grid: &Grid) -> Paragraph<'static> {
        let live = Style::default().fg(Color::Green);
        let lines: Vec<Line> = grid
            .rows()
            .map(|row| {
                let text: String = row
                    .iter()
                    .map(|cell| if cell.is_live() { LIVE_SYMBOL } else { DEAD_SYMBOL })
                    .collect();
                Line::styled(text, live)
            })
            .collect();

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Life "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::buffer_lines;
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(renderer: &mut LifeRenderer, engine: &LifeEngine<StdRng>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 7)).unwrap();
        terminal.draw(|frame| renderer.render(frame, engine)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn engine(text: &str, boundaries: bool) -> LifeEngine<StdRng> {
        LifeEngine::with_grid(text.parse().unwrap(), boundaries, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_draws_population_cells_and_controls() {
        let mut renderer = LifeRenderer::new();
        let lines = draw(&mut renderer, &engine("*..\n.*.\n..*", true));

        assert!(lines[0].starts_with("Population: 3"));
        assert!(lines[1].starts_with("┌ Life "));
        assert!(lines[2].starts_with("│*  "));
        assert!(lines[3].starts_with("│ * "));
        assert!(lines[4].starts_with("│  *"));
        assert!(lines[6].starts_with(
            "Exit: \"Q\", Restart: \"R\", Toggle boundaries: \"B\" (on)"
        ));
    }

    #[test]
    fn test_population_keeps_previous_width() {
        let mut renderer = LifeRenderer::new();
        let big = "*****\n*****\n.....";
        let lines = draw(&mut renderer, &engine(big, false));
        assert!(lines[0].starts_with("Population: 10"));

        let lines = draw(&mut renderer, &engine("*....\n.....\n.....", false));
        assert!(lines[0].starts_with("Population:  1"));

        let lines = draw(&mut renderer, &engine("*....\n.....\n.....", false));
        assert!(lines[0].starts_with("Population: 1"));
        assert!(lines[6].contains("(off)"));
    }
}
