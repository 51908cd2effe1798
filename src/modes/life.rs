use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::info;
use tokio::time::interval;

use super::{check_tick_interval, enter_terminal, finish, Tui};
use crate::input::{InputHandler, KeyAction};
use crate::life::{LifeConfig, LifeEngine};
use crate::render::LifeRenderer;

/// Delay between two generations
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);

/// Self-running Game of Life with restart and boundary toggle keys
pub struct LifeMode {
    engine: LifeEngine,
    renderer: LifeRenderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl LifeMode {
    pub fn new(config: LifeConfig, tick_interval: Duration) -> Result<Self> {
        check_tick_interval(tick_interval)?;
        let engine = LifeEngine::new(config).context("Failed to create life board")?;

        Ok(Self {
            engine,
            renderer: LifeRenderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = enter_terminal()?;
        info!(
            "life started on a {}x{} board, boundaries {}",
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
        let mut generation: u64 = 0;

        while !self.should_quit {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // draw the current generation, then advance
                _ = tick_timer.tick() => {
                    terminal
                        .draw(|frame| self.renderer.render(frame, &self.engine))
                        .context("Failed to draw frame")?;
                    self.engine.tick();
                    generation += 1;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }
        }

        info!(
            "life quit after {} generations, population {}",
            generation,
            self.engine.population()
        );
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
            KeyAction::ToggleBoundaries => self.engine.toggle_boundaries(),
            KeyAction::Restart => {
                self.engine
                    .reset()
                    .context("Failed to reset life board")?;
                info!("life restarted, population {}", self.engine.population());
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Turn(_) | KeyAction::None => {}
        }
        Ok(())
    }
}
