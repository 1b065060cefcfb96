use super::InputSource;
use crate::game::Direction;

/// Largest value a 10-bit ADC channel reports
pub const ADC_MAX: u16 = 1023;
/// Resting value of a centered stick
pub const ADC_CENTER: u16 = 512;
/// Readings below this count as a full deflection towards zero
pub const LOW_THRESHOLD: u16 = 256;
/// Readings at or above this count as a full deflection towards max
pub const HIGH_THRESHOLD: u16 = 768;

/// Two analog channels of a thumb stick
pub trait AnalogAxes {
    /// Read `(x, y)` in `0..=ADC_MAX`. Channel x is the vertical axis.
    fn read_axes(&mut self) -> (u16, u16);
}

/// Turns raw stick readings into directions.
///
/// Each channel is split into quadrants; a reading in the middle band leaves
/// the previous direction in place, so the snake keeps going when the stick
/// springs back to center.
pub struct Joystick<A: AnalogAxes> {
    axes: A,
    direction: Direction,
}

impl<A: AnalogAxes> Joystick<A> {
    pub fn new(axes: A) -> Self {
        Self {
            axes,
            direction: Direction::None,
        }
    }

    pub fn axes_mut(&mut self) -> &mut A {
        &mut self.axes
    }

    /// Apply one reading. The y channel is checked last and wins on diagonals.
    pub fn update(&mut self, x: u16, y: u16) -> Direction {
        if x < LOW_THRESHOLD {
            self.direction = Direction::Down;
        }
        if (HIGH_THRESHOLD..=ADC_MAX).contains(&x) {
            self.direction = Direction::Up;
        }
        if y < LOW_THRESHOLD {
            self.direction = Direction::Left;
        }
        if (HIGH_THRESHOLD..=ADC_MAX).contains(&y) {
            self.direction = Direction::Right;
        }
        self.direction
    }
}

impl<A: AnalogAxes> InputSource for Joystick<A> {
    fn read_direction(&mut self) -> Direction {
        let (x, y) = self.axes.read_axes();
        self.update(x, y)
    }
}

/// Stick driven from software, e.g. by arrow keys.
///
/// A push holds a full deflection until the next read, then the stick
/// springs back to center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualStick {
    x: u16,
    y: u16,
}

impl VirtualStick {
    pub fn new() -> Self {
        Self {
            x: ADC_CENTER,
            y: ADC_CENTER,
        }
    }

    /// Deflect the stick fully towards a direction
    pub fn push(&mut self, direction: Direction) {
        *self = Self::new();
        match direction {
            Direction::Up => self.x = ADC_MAX,
            Direction::Down => self.x = 0,
            Direction::Left => self.y = 0,
            Direction::Right => self.y = ADC_MAX,
            Direction::None => {}
        }
    }
}

impl Default for VirtualStick {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogAxes for VirtualStick {
    fn read_axes(&mut self) -> (u16, u16) {
        let reading = (self.x, self.y);
        *self = Self::new();
        reading
    }
}
