//! Core game logic for snake on two 8x8 panels
//!
//! This module contains all the game logic without any I/O dependencies.
//! Display, food randomness and input come in through small traits so the
//! same engine runs against LED panels, a terminal, or a test harness.

pub mod action;
pub mod config;
pub mod display;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, resolve};
pub use config::{GameConfig, StallPolicy};
pub use display::{DisplaySink, PanelDisplay};
pub use engine::{GameEngine, TickOutcome};
pub use food::{FoodSource, RandomFood, SeededFood};
pub use state::{GRID_HEIGHT, GRID_WIDTH, GameState, PANEL_SIZE, Position, Snake};
