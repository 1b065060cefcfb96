//! Panel Snake - snake on two 8x8 LED panels steered by an analog joystick
//!
//! This library provides:
//! - Core game logic: motion, food, collisions and pacing (game module)
//! - Joystick thresholding and scripted inputs (input module)
//! - TUI rendering of the two panels (render module)
//! - Human and headless execution modes (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
