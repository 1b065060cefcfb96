use tracing::{debug, info, trace};

use super::{
    action::{Direction, resolve},
    config::{GameConfig, StallPolicy},
    display::DisplaySink,
    food::FoodSource,
    state::{GRID_HEIGHT, GRID_WIDTH, GameState, Position, Snake},
};

/// How many times the food source is asked for a free cell before falling
/// back to a scan of the grid
const MAX_FOOD_ATTEMPTS: u64 = 32;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved (or held still on a frozen stall)
    Advanced {
        /// Whether the snake ate food this tick
        ate_food: bool,
    },
    /// The head ran into the body and the game was reset
    GameOver {
        /// Score of the game that just ended
        score: usize,
        /// Whether that score became the new high score
        new_high_score: bool,
    },
    /// The tick after a game over; nothing moved
    Resumed,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    food_source: Box<dyn FoodSource>,
    high_score: usize,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig, food_source: Box<dyn FoodSource>) -> Self {
        Self {
            config,
            food_source,
            high_score: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Best score seen since the engine was created
    pub fn high_score(&self) -> usize {
        self.high_score
    }

    /// Score for a snake of the given length
    pub fn score_for(&self, length: usize) -> usize {
        length.saturating_sub(self.config.score_offset)
    }

    /// Fresh game state: a horizontal snake, no direction, no food yet
    pub fn reset(&self) -> GameState {
        let snake = Snake::horizontal(self.config.initial_length, self.config.start_row);
        GameState::new(snake, self.config.initial_delay_ms)
    }

    /// Redraw everything the state shows, from a blank display
    pub fn render(&self, state: &GameState, display: &mut impl DisplaySink) {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                display.set_position(Position::new(x, y), false);
            }
        }
        for &pos in &state.snake.body {
            display.set_position(pos, true);
        }
        if let Some(food) = state.food {
            display.set_position(food, true);
        }
    }

    /// Execute one tick of the game
    pub fn tick(
        &mut self,
        state: &mut GameState,
        proposed: Direction,
        display: &mut impl DisplaySink,
    ) -> TickOutcome {
        if state.game_over {
            state.game_over = false;
            return TickOutcome::Resumed;
        }

        let direction = resolve(state.direction, proposed);
        if direction != Direction::None {
            state.direction = direction;
        }
        state.ticks += 1;
        trace!(tick = state.ticks, ?direction, "tick");

        self.move_snake(state, direction, display);
        let ate_food = self.manage_food(state, display);

        let length = state.snake.len();
        let previous_high = self.high_score;
        if self.detect_and_resolve(state, display) {
            return TickOutcome::GameOver {
                score: self.score_for(length),
                new_high_score: self.high_score > previous_high,
            };
        }

        TickOutcome::Advanced { ate_food }
    }

    /// Motion step plus its rendering: old segments are cleared, new ones lit
    fn move_snake(
        &self,
        state: &mut GameState,
        direction: Direction,
        display: &mut impl DisplaySink,
    ) {
        if direction == Direction::None && self.config.stall_policy == StallPolicy::Freeze {
            return;
        }

        for &pos in &state.snake.body {
            display.set_position(pos, false);
        }
        state.snake.step(direction);
        for &pos in &state.snake.body {
            display.set_position(pos, true);
        }
    }

    /// Place food when there is none, then check whether the head is on it.
    ///
    /// Eating grows the snake by one segment placed a cell beyond the food in
    /// the direction of travel, and shortens the tick delay.
    pub fn manage_food(&mut self, state: &mut GameState, display: &mut impl DisplaySink) -> bool {
        let food = match state.food {
            Some(food) => food,
            None => {
                let food = self.place_food(&state.snake);
                debug!(x = food.x, y = food.y, "food placed");
                display.set_position(food, true);
                state.food = Some(food);
                food
            }
        };

        if state.snake.head() != food {
            return false;
        }

        // The head sits on the food cell, so it stays lit
        if !state.is_occupied_by_snake(food) {
            display.set_position(food, false);
        }
        state.food = None;

        let new_head = food.moved_in_direction(state.direction);
        state.snake.grow(new_head);
        display.set_position(new_head, true);

        state.speed_delay_ms = state
            .speed_delay_ms
            .saturating_sub(self.config.delay_step_ms)
            .max(self.config.min_delay_ms);

        debug!(
            length = state.snake.len(),
            delay_ms = state.speed_delay_ms,
            "food eaten"
        );
        true
    }

    /// Check the head against the body and reset the game on a hit.
    /// Returns whether the game ended.
    pub fn detect_and_resolve(
        &mut self,
        state: &mut GameState,
        display: &mut impl DisplaySink,
    ) -> bool {
        if !state.snake.head_hits_body() {
            return false;
        }

        let length = state.snake.len();
        let score = self.score_for(length);
        if score > self.high_score {
            info!(score, previous = self.high_score, "new high score");
            self.high_score = score;
        }
        info!(length, score, "game over");

        for &pos in &state.snake.body {
            display.set_position(pos, false);
        }
        state.snake.body.truncate(self.config.reset_length);
        for &pos in &state.snake.body {
            display.set_position(pos, true);
        }

        state.direction = Direction::None;
        state.speed_delay_ms = self.config.initial_delay_ms;
        state.game_over = true;
        true
    }

    /// Ask the food source for a cell off the snake, seeded by its length.
    /// Falls back to the first free cell in the food area, then anywhere.
    fn place_food(&mut self, snake: &Snake) -> Position {
        let seed = snake.len() as u64;
        let mut candidate = Position::new(0, 0);

        for attempt in 0..MAX_FOOD_ATTEMPTS {
            candidate = self.food_source.next_food(seed + attempt).wrapped();
            if !snake.body.contains(&candidate) {
                return candidate;
            }
        }

        let in_area = (0..self.config.food_height)
            .flat_map(|y| (0..self.config.food_width).map(move |x| Position::new(x, y)));
        let anywhere =
            (0..GRID_HEIGHT).flat_map(|y| (0..GRID_WIDTH).map(move |x| Position::new(x, y)));

        in_area
            .chain(anywhere)
            .find(|pos| !snake.body.contains(pos))
            .unwrap_or(candidate)
    }
}
