use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::state::{GRID_HEIGHT, GRID_WIDTH};

/// What happens on a tick whose resolved direction is `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StallPolicy {
    /// Skip the motion step entirely; the snake holds still
    #[default]
    Freeze,
    /// Shift the body but keep the head in place, so head and neck overlap
    Duplicate,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of the snake when the program starts
    pub initial_length: usize,
    /// Row the starting snake is laid out on
    pub start_row: i32,
    /// Length the snake is cut back to after a collision
    pub reset_length: usize,

    // Pacing
    /// Delay after each tick at the start of a game
    pub initial_delay_ms: u32,
    /// Delay removed for every food eaten
    pub delay_step_ms: u32,
    /// Lower bound for the delay
    pub min_delay_ms: u32,

    /// Food is placed with x in `[0, food_width)`
    pub food_width: i32,
    /// Food is placed with y in `[0, food_height)`
    pub food_height: i32,

    pub stall_policy: StallPolicy,
    /// Subtracted from the length to get the score
    pub score_offset: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_length: 15,
            start_row: 1,
            reset_length: 2,
            initial_delay_ms: 150,
            delay_step_ms: 7,
            min_delay_ms: 10,
            food_width: GRID_WIDTH - 1,
            food_height: GRID_HEIGHT - 1,
            stall_policy: StallPolicy::Freeze,
            score_offset: 3,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml_ng::from_str(content).context("Failed to parse YAML config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=GRID_WIDTH as usize).contains(&self.initial_length) {
            bail!(
                "initial_length must be between 2 and {}, got {}",
                GRID_WIDTH,
                self.initial_length
            );
        }
        if self.reset_length < 2 || self.reset_length > self.initial_length {
            bail!(
                "reset_length must be between 2 and initial_length ({}), got {}",
                self.initial_length,
                self.reset_length
            );
        }
        if !(0..GRID_HEIGHT).contains(&self.start_row) {
            bail!("start_row must be between 0 and {}", GRID_HEIGHT - 1);
        }
        if !(1..=GRID_WIDTH).contains(&self.food_width) {
            bail!("food_width must be between 1 and {}", GRID_WIDTH);
        }
        if !(1..=GRID_HEIGHT).contains(&self.food_height) {
            bail!("food_height must be between 1 and {}", GRID_HEIGHT);
        }
        if self.min_delay_ms == 0 || self.min_delay_ms > self.initial_delay_ms {
            bail!(
                "min_delay_ms must be between 1 and initial_delay_ms ({}), got {}",
                self.initial_delay_ms,
                self.min_delay_ms
            );
        }
        Ok(())
    }

    /// Place food anywhere on the grid instead of the default 15x7 area
    pub fn with_full_grid_food(mut self) -> Self {
        self.food_width = GRID_WIDTH;
        self.food_height = GRID_HEIGHT;
        self
    }
}
