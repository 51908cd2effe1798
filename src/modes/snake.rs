use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::info;
use tokio::time::interval;

use super::{check_tick_interval, enter_terminal, finish, Tui};
use crate::error::GameError;
use crate::game::{Direction, SnakeConfig, SnakeEngine};
use crate::input::{InputHandler, KeyAction};
use crate::render::SnakeRenderer;

/// Delay between two snake moves
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Keyboard-controlled snake game
pub struct SnakeMode {
    engine: SnakeEngine,
    renderer: SnakeRenderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    game_over: bool,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl SnakeMode {
    pub fn new(config: SnakeConfig, tick_interval: Duration) -> Result<Self> {
        check_tick_interval(tick_interval)?;
        let engine = SnakeEngine::new(config).context("Failed to create snake board")?;

        Ok(Self {
            engine,
            renderer: SnakeRenderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            game_over: false,
            should_quit: false,
            pending_direction: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = enter_terminal()?;
        info!(
            "snake started on a {}x{} board, boundaries {}",
            self.engine.width(),
            self.engine.height(),
            self.engine.boundaries()
        );

        let result = self.run_game_loop(&mut terminal).await;
        finish(&mut terminal, result)
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);

        while !self.should_quit {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            terminal
                .draw(|frame| self.renderer.render(frame, &self.engine, self.game_over))
                .context("Failed to draw frame")?;
        }

        info!("snake quit with score {}", self.engine.score());
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.apply(self.input_handler.handle_key_event(key))?;
        }
        Ok(())
    }

    fn apply(&mut self, action: KeyAction) -> Result<()> {
        match action {
            KeyAction::Turn(direction) => self.pending_direction = Some(direction),
            KeyAction::ToggleBoundaries => self.engine.toggle_boundaries(),
            KeyAction::Restart => self.reset_game()?,
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
        Ok(())
    }

    /// One move; a game over freezes the board until restart
    fn update_game(&mut self) -> Result<()> {
        if self.game_over {
            return Ok(());
        }

        if let Some(direction) = self.pending_direction.take() {
            self.engine.set_direction(direction);
        }

        match self.engine.tick() {
            Ok(()) => Ok(()),
            Err(GameError::GameOver(reason)) => {
                info!("game over: {}, score {}", reason, self.engine.score());
                self.game_over = true;
                Ok(())
            }
            Err(err) => Err(err).context("Snake tick failed"),
        }
    }

    fn reset_game(&mut self) -> Result<()> {
        self.engine.reset().context("Failed to reset snake board")?;
        self.game_over = false;
        self.pending_direction = None;
        Ok(())
    }
}
