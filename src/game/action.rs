/// Direction the snake can move, encoded the way the joystick reports it.
///
/// Opposite directions differ by exactly 2 (`Up`/`Down`, `Right`/`Left`),
/// which is what [`Direction::is_opposite`] relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Direction {
    /// No change requested
    #[default]
    None = 0,
    Up = 1,
    Right = 2,
    Down = 3,
    Left = 4,
}

impl Direction {
    pub const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Raw joystick code (0..=4)
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a raw joystick code. Anything outside 1..=4 means "no change".
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Direction::Up,
            2 => Direction::Right,
            3 => Direction::Down,
            4 => Direction::Left,
            _ => Direction::None,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    /// `None` is never opposite to anything.
    pub fn is_opposite(&self, other: Direction) -> bool {
        if *self == Direction::None || other == Direction::None {
            return false;
        }
        (self.code() as i16 - other.code() as i16).abs() == 2
    }

    /// Returns the delta (dx, dy) for moving in this direction. Up increases y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Direction resolver: a direct reversal into the snake's neck is rejected
/// and `current` is kept. Everything else, `None` included, is accepted.
pub fn resolve(current: Direction, proposed: Direction) -> Direction {
    if current.is_opposite(proposed) {
        current
    } else {
        proposed
    }
}
