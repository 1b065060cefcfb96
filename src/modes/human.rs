use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep};
use tracing::info;

use crate::game::{GameEngine, GameState, PanelDisplay, TickOutcome};
use crate::input::{InputHandler, InputSource, Joystick, KeyAction, VirtualStick};
use crate::metrics::GameMetrics;
use crate::render::{Hud, Renderer};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    display: PanelDisplay,
    joystick: Joystick<VirtualStick>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let state = engine.reset();
        let mut display = PanelDisplay::new();
        engine.render(&state, &mut display);

        Self {
            engine,
            state,
            display,
            joystick: Joystick::new(VirtualStick::new()),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The tick delay shrinks as the snake grows, so the timer is re-armed
        // after every tick instead of using a fixed interval
        let tick_timer = sleep(self.tick_delay(None));
        tokio::pin!(tick_timer);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                () = &mut tick_timer => {
                    let outcome = self.update_game();
                    tick_timer.as_mut().reset(Instant::now() + self.tick_delay(Some(outcome)));
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let hud = Hud {
                        state: &self.state,
                        metrics: &self.metrics,
                        score: self.engine.score_for(self.state.snake.len()),
                        high_score: self.engine.high_score(),
                    };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.display, &hud);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Delay before the next tick; the tick after a game over runs at once
    fn tick_delay(&self, last: Option<TickOutcome>) -> Duration {
        match last {
            Some(TickOutcome::GameOver { .. }) => Duration::ZERO,
            _ => Duration::from_millis(self.state.speed_delay_ms as u64),
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => self.joystick.axes_mut().push(direction),
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) -> TickOutcome {
        let direction = self.joystick.read_direction();
        let outcome = self
            .engine
            .tick(&mut self.state, direction, &mut self.display);

        if let TickOutcome::GameOver {
            score,
            new_high_score,
        } = outcome
        {
            info!(score, new_high_score, "game over in human mode");
        }
        self.metrics.record(outcome);

        outcome
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.display.clear();
        self.engine.render(&self.state, &mut self.display);
        self.joystick = Joystick::new(VirtualStick::new());
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, Position, SeededFood};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode() -> HumanMode {
        let config = GameConfig::default();
        let food = SeededFood::new(config.food_width, config.food_height);
        HumanMode::new(GameEngine::new(config, Box::new(food)))
    }

    fn press(mode: &mut HumanMode, code: KeyCode) {
        mode.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.state.snake.len(), 15);
        assert_eq!(mode.display.lit_count(), 15);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_snake_waits_for_first_input() {
        let mut mode = mode();
        let head = mode.state.snake.head();

        mode.update_game();

        assert_eq!(mode.state.snake.head(), head);
    }

    #[test]
    fn test_key_steers_snake() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Up);

        mode.update_game();
        assert_eq!(mode.state.snake.head(), Position::new(15, 2));

        // Stick springs back but the direction is kept
        mode.update_game();
        assert_eq!(mode.state.snake.head(), Position::new(15, 3));
        assert_eq!(mode.state.direction, Direction::Up);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Up);
        mode.update_game();

        press(&mut mode, KeyCode::Char('r'));

        assert_eq!(mode.state.snake.head(), Position::new(15, 1));
        assert_eq!(mode.state.direction, Direction::None);
        assert_eq!(mode.display.lit_count(), 15);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Char('q'));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_tick_after_game_over_is_immediate() {
        let mode = mode();
        let outcome = TickOutcome::GameOver {
            score: 1,
            new_high_score: true,
        };
        assert_eq!(mode.tick_delay(Some(outcome)), Duration::ZERO);
        assert_eq!(mode.tick_delay(None), Duration::from_millis(150));
    }
}
