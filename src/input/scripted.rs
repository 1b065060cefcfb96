use rand::{Rng, SeedableRng, rngs::StdRng};

use super::InputSource;
use crate::game::Direction;

/// Plays back a fixed list of directions, then repeats the last one
pub struct ScriptedInput {
    directions: Vec<Direction>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(directions: Vec<Direction>) -> Self {
        Self {
            directions,
            cursor: 0,
        }
    }

    /// Build from raw joystick codes
    pub fn from_codes(codes: &[u8]) -> Self {
        Self::new(codes.iter().copied().map(Direction::from_code).collect())
    }
}

impl InputSource for ScriptedInput {
    fn read_direction(&mut self) -> Direction {
        let Some(last) = self.directions.len().checked_sub(1) else {
            return Direction::None;
        };
        let direction = self.directions[self.cursor.min(last)];
        self.cursor += 1;
        direction
    }
}

/// Random player: holds a direction for a few ticks, then picks a new one
pub struct RandomWalk {
    rng: StdRng,
    hold_ticks: u32,
    remaining: u32,
    direction: Direction,
}

impl RandomWalk {
    pub fn new(seed: u64, hold_ticks: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            hold_ticks: hold_ticks.max(1),
            remaining: 0,
            direction: Direction::None,
        }
    }
}

impl InputSource for RandomWalk {
    fn read_direction(&mut self) -> Direction {
        if self.remaining == 0 {
            let index = self.rng.gen_range(0..Direction::MOVES.len());
            self.direction = Direction::MOVES[index];
            self.remaining = self.rng.gen_range(1..=self.hold_ticks);
        }
        self.remaining -= 1;
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_repeats_last() {
        let mut input = ScriptedInput::from_codes(&[2, 1]);
        assert_eq!(input.read_direction(), Direction::Right);
        assert_eq!(input.read_direction(), Direction::Up);
        assert_eq!(input.read_direction(), Direction::Up);
    }

    #[test]
    fn test_empty_script() {
        let mut input = ScriptedInput::new(Vec::new());
        assert_eq!(input.read_direction(), Direction::None);
    }

    #[test]
    fn test_random_walk_is_reproducible() {
        let mut a = RandomWalk::new(7, 4);
        let mut b = RandomWalk::new(7, 4);
        for _ in 0..50 {
            let direction = a.read_direction();
            assert_eq!(direction, b.read_direction());
            assert_ne!(direction, Direction::None);
        }
    }
}
