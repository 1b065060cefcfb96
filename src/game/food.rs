use rand::{Rng, SeedableRng, rngs::StdRng};

use super::state::Position;

/// Source of candidate food positions
pub trait FoodSource {
    /// Produce a candidate position. `seed` is the current snake length,
    /// offset by the attempt number when a candidate lands on the snake.
    fn next_food(&mut self, seed: u64) -> Position;
}

/// Reseeds from the given seed on every call, so the same seed always
/// yields the same food position
pub struct SeededFood {
    width: i32,
    height: i32,
}

impl SeededFood {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl FoodSource for SeededFood {
    fn next_food(&mut self, seed: u64) -> Position {
        let mut rng = StdRng::seed_from_u64(seed);
        Position::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}

/// Thread-local randomness; the seed is ignored
pub struct RandomFood {
    width: i32,
    height: i32,
    rng: rand::rngs::ThreadRng,
}

impl RandomFood {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            rng: rand::thread_rng(),
        }
    }
}

impl FoodSource for RandomFood {
    fn next_food(&mut self, _seed: u64) -> Position {
        Position::new(
            self.rng.gen_range(0..self.width),
            self.rng.gen_range(0..self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_food_is_deterministic() {
        let mut a = SeededFood::new(15, 7);
        let mut b = SeededFood::new(15, 7);
        for seed in 0..20 {
            assert_eq!(a.next_food(seed), b.next_food(seed));
        }
        assert_eq!(a.next_food(5), a.next_food(5));
    }

    #[test]
    fn test_food_stays_in_range() {
        let mut seeded = SeededFood::new(15, 7);
        let mut random = RandomFood::new(15, 7);
        for seed in 0..200 {
            for pos in [seeded.next_food(seed), random.next_food(seed)] {
                assert!((0..15).contains(&pos.x));
                assert!((0..7).contains(&pos.y));
            }
        }
    }
}
