//! Blocking tick loop without a terminal UI
//!
//! Each iteration polls the input, runs one engine tick and then sleeps for
//! the state's current delay. The tick that follows a game over only clears
//! the flag, so it is not paced.

use std::time::Duration;
use tracing::info;

use crate::game::{DisplaySink, GameEngine, GameState, PanelDisplay, TickOutcome};
use crate::input::InputSource;
use crate::metrics::GameMetrics;

/// Blocking delay between ticks
pub trait Pacer {
    fn sleep_ms(&mut self, duration_ms: u32);
}

/// Sleeps the current thread
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn sleep_ms(&mut self, duration_ms: u32) {
        std::thread::sleep(Duration::from_millis(duration_ms as u64));
    }
}

/// Never waits; runs as fast as the engine allows
pub struct NoPacer;

impl Pacer for NoPacer {
    fn sleep_ms(&mut self, _duration_ms: u32) {}
}

/// Totals for a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub games_over: u32,
    pub foods_eaten: u32,
    pub high_score: usize,
    pub final_length: usize,
}

/// Run `max_ticks` iterations of read → tick → sleep
pub fn run<I, D, P>(
    engine: &mut GameEngine,
    state: &mut GameState,
    input: &mut I,
    display: &mut D,
    pacer: &mut P,
    max_ticks: u64,
) -> RunSummary
where
    I: InputSource + ?Sized,
    D: DisplaySink,
    P: Pacer + ?Sized,
{
    let mut metrics = GameMetrics::new();

    for _ in 0..max_ticks {
        let direction = input.read_direction();
        let outcome = engine.tick(state, direction, display);
        metrics.record(outcome);

        if outcome != TickOutcome::Resumed {
            pacer.sleep_ms(state.speed_delay_ms);
        }
    }

    RunSummary {
        ticks: max_ticks,
        games_over: metrics.games_played,
        foods_eaten: metrics.foods_eaten,
        high_score: engine.high_score(),
        final_length: state.snake.len(),
    }
}

pub struct HeadlessMode {
    engine: GameEngine,
    state: GameState,
    display: PanelDisplay,
    input: Box<dyn InputSource>,
    pacer: Box<dyn Pacer>,
}

impl HeadlessMode {
    pub fn new(engine: GameEngine, input: Box<dyn InputSource>, pacer: Box<dyn Pacer>) -> Self {
        let state = engine.reset();
        let mut display = PanelDisplay::new();
        engine.render(&state, &mut display);

        Self {
            engine,
            state,
            display,
            input,
            pacer,
        }
    }

    pub fn run(&mut self, max_ticks: u64) -> RunSummary {
        info!(max_ticks, "headless run started");
        let summary = run(
            &mut self.engine,
            &mut self.state,
            self.input.as_mut(),
            &mut self.display,
            self.pacer.as_mut(),
            max_ticks,
        );
        info!(?summary, "headless run finished");
        summary
    }

    pub fn display(&self) -> &PanelDisplay {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, Position, SeededFood, Snake};
    use crate::input::{RandomWalk, ScriptedInput};

    /// Records every requested delay
    struct RecordingPacer(Vec<u32>);

    impl Pacer for RecordingPacer {
        fn sleep_ms(&mut self, duration_ms: u32) {
            self.0.push(duration_ms);
        }
    }

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::default(), Box::new(SeededFood::new(15, 7)))
    }

    #[test]
    fn test_loop_paces_every_tick() {
        let mut engine = engine();
        let mut state = engine.reset();
        let mut display = PanelDisplay::new();
        let mut input = ScriptedInput::new(vec![Direction::Up]);
        let mut pacer = RecordingPacer(Vec::new());

        let summary = run(
            &mut engine,
            &mut state,
            &mut input,
            &mut display,
            &mut pacer,
            3,
        );

        assert_eq!(summary.ticks, 3);
        assert_eq!(pacer.0.len(), 3);
        assert!(pacer.0.iter().all(|&delay| delay <= 150));
    }

    #[test]
    fn test_resumed_tick_is_not_paced() {
        let mut engine = engine();
        // Turning up from (1,2) hits the body on the first tick
        let body = [(0, 4), (1, 4), (1, 3), (2, 3), (2, 2), (1, 2)]
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        let mut state = GameState::new(Snake::new(body), 150);
        state.direction = Direction::Left;
        state.food = Some(Position::new(10, 0));
        let mut display = PanelDisplay::new();
        let mut input = ScriptedInput::new(vec![Direction::Up, Direction::Right]);
        let mut pacer = RecordingPacer(Vec::new());

        let summary = run(
            &mut engine,
            &mut state,
            &mut input,
            &mut display,
            &mut pacer,
            3,
        );

        assert_eq!(summary.games_over, 1);
        assert_eq!(summary.high_score, 3);
        assert_eq!(pacer.0, vec![150, 150]);
    }

    #[test]
    fn test_headless_mode_runs() {
        let mut mode = HeadlessMode::new(
            engine(),
            Box::new(RandomWalk::new(1, 5)),
            Box::new(NoPacer),
        );

        let summary = mode.run(500);

        assert_eq!(summary.ticks, 500);
        assert!(summary.final_length >= 2);
        assert!(mode.display().lit_count() > 0);
    }
}
