//! Direction sources: the analog joystick and its stand-ins

pub mod handler;
pub mod joystick;
pub mod scripted;

pub use handler::{InputHandler, KeyAction};
pub use joystick::{AnalogAxes, Joystick, VirtualStick};
pub use scripted::{RandomWalk, ScriptedInput};

use crate::game::Direction;

/// Anything that can be polled once per tick for a direction
pub trait InputSource {
    /// Must not block. Returns the last direction when nothing new is pressed.
    fn read_direction(&mut self) -> Direction;
}
