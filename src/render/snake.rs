use std::collections::HashSet;

use rand::Rng;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{controls_line, split};
use crate::game::{Position, SnakeEngine};

const FRUIT_SYMBOL: &str = "X";
const HEAD_SYMBOL: &str = "O";
const BODY_SYMBOL: &str = "o";
const EMPTY_SYMBOL: &str = " ";

/// Draws a [`SnakeEngine`] snapshot or the game-over screen
#[derive(Debug, Default)]
pub struct SnakeRenderer;

impl SnakeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R: Rng>(&self, frame: &mut Frame, engine: &SnakeEngine<R>, game_over: bool) {
        let (status, board, controls) = split(frame.area());

        frame.render_widget(self.render_score(engine.score()), status);
        if game_over {
            frame.render_widget(self.render_game_over(engine.score()), board);
        } else {
            frame.render_widget(self.render_grid(engine), board);
        }
        frame.render_widget(
            Paragraph::new(controls_line(
                &[("Controls", "WASD"), ("Exit", "Q"), ("Restart", "R")],
                engine.boundaries(),
            )),
            controls,
        );
    }

    fn render_score(&self, score: u32) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
    }

    fn render_grid<R: Rng>(&self, engine: &SnakeEngine<R>) -> Paragraph<'static> {
        let head = engine.head();
        let body: HashSet<Position> = engine.segments().iter().copied().collect();
        let mut lines = Vec::with_capacity(engine.height());

        for y in 0..engine.height() {
            let spans: Vec<Span> = (0..engine.width())
                .map(|x| {
                    let pos = Position::new(x as i32, y as i32);
                    if pos == head {
                        Span::styled(
                            HEAD_SYMBOL,
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if body.contains(&pos) {
                        Span::styled(BODY_SYMBOL, Style::default().fg(Color::Green))
                    } else if engine.fruit() == Some(pos) {
                        Span::styled(
                            FRUIT_SYMBOL,
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::raw(EMPTY_SYMBOL)
                    }
                })
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Snake "))
    }

    fn render_game_over(&self, score: u32) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }
}
