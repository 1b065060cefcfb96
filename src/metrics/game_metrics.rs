use std::time::{Duration, Instant};

use crate::game::TickOutcome;

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub foods_eaten: u32,
    pub last_score: Option<usize>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            games_played: 0,
            foods_eaten: 0,
            last_score: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn record(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Advanced { ate_food: true } => self.foods_eaten += 1,
            TickOutcome::GameOver { score, .. } => {
                self.games_played += 1;
                self.last_score = Some(score);
                self.on_game_start();
            }
            _ => {}
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
