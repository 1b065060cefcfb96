use super::action::Direction;

/// Width of a single LED panel
pub const PANEL_SIZE: i32 = 8;
/// Number of panels placed side by side
pub const PANEL_COUNT: usize = 2;
/// Width of the combined toroidal grid
pub const GRID_WIDTH: i32 = PANEL_SIZE * PANEL_COUNT as i32;
/// Height of the combined toroidal grid
pub const GRID_HEIGHT: i32 = PANEL_SIZE;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, wrapping around the grid on both axes
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped()
    }

    /// Move position one cell in a direction, wrapping around the grid
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Bring the position back onto the 16x8 torus
    pub fn wrapped(&self) -> Self {
        Self {
            x: self.x.rem_euclid(GRID_WIDTH),
            y: self.y.rem_euclid(GRID_HEIGHT),
        }
    }

    /// Panel index and panel-local column for this position
    pub fn panel(&self) -> (usize, i32) {
        ((self.x / PANEL_SIZE) as usize, self.x % PANEL_SIZE)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with the tail at index 0 and the head last
    pub body: Vec<Position>,
}

impl Snake {
    pub fn new(body: Vec<Position>) -> Self {
        Self { body }
    }

    /// Horizontal snake occupying `(1, row)..=(length, row)`, head on the right
    pub fn horizontal(length: usize, row: i32) -> Self {
        let body = (1..=length as i32)
            .map(|x| Position::new(x, row).wrapped())
            .collect();
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get the tail position
    pub fn tail(&self) -> Position {
        self.body[0]
    }

    /// Advance one cell.
    ///
    /// Every segment but the head takes its successor's place, then the head
    /// moves one cell from its old position. With `Direction::None` the head
    /// stays where it was, so it ends up sharing a cell with its neck.
    pub fn step(&mut self, direction: Direction) {
        let old_head = self.head();
        self.body.rotate_left(1);
        let len = self.body.len();
        self.body[len - 1] = old_head.moved_in_direction(direction);
    }

    /// Append a new head segment
    pub fn grow(&mut self, new_head: Position) {
        self.body.push(new_head);
    }

    /// Check whether the head sits on a segment in `[1, len - 2]`.
    /// The tail (index 0) is never checked.
    pub fn head_hits_body(&self) -> bool {
        let len = self.body.len();
        if len < 3 {
            return false;
        }
        let head = self.head();
        self.body[1..len - 1].contains(&head)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction used by the last motion step
    pub direction: Direction,
    /// Pacing delay applied after each tick
    pub speed_delay_ms: u32,
    pub food: Option<Position>,
    pub game_over: bool,
    pub ticks: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, speed_delay_ms: u32) -> Self {
        Self {
            snake,
            direction: Direction::None,
            speed_delay_ms,
            food: None,
            game_over: false,
            ticks: 0,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(
            Position::new(15, 3).moved_in_direction(Direction::Right),
            Position::new(0, 3)
        );
        assert_eq!(
            Position::new(0, 3).moved_in_direction(Direction::Left),
            Position::new(15, 3)
        );
        assert_eq!(
            Position::new(4, 0).moved_in_direction(Direction::Down),
            Position::new(4, 7)
        );
        assert_eq!(
            Position::new(4, 7).moved_in_direction(Direction::Up),
            Position::new(4, 0)
        );
    }

    #[test]
    fn test_panel_addressing() {
        assert_eq!(Position::new(0, 0).panel(), (0, 0));
        assert_eq!(Position::new(7, 2).panel(), (0, 7));
        assert_eq!(Position::new(8, 2).panel(), (1, 0));
        assert_eq!(Position::new(15, 7).panel(), (1, 7));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::horizontal(15, 1);
        assert_eq!(snake.len(), 15);
        assert_eq!(snake.tail(), Position::new(1, 1));
        assert_eq!(snake.head(), Position::new(15, 1));
    }

    #[test]
    fn test_step_shifts_body() {
        let mut snake = Snake::horizontal(5, 2);
        let old = snake.body.clone();

        snake.step(Direction::Up);

        assert_eq!(snake.len(), 5);
        for i in 0..4 {
            assert_eq!(snake.body[i], old[i + 1]);
        }
        assert_eq!(snake.head(), Position::new(5, 3));
    }

    #[test]
    fn test_step_none_duplicates_head() {
        let mut snake = Snake::horizontal(4, 2);
        let old_head = snake.head();

        snake.step(Direction::None);

        assert_eq!(snake.head(), old_head);
        assert_eq!(snake.body[2], old_head);
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::horizontal(4, 0);
        assert!(!snake.head_hits_body());

        // Head on index 1
        let snake = Snake::new(vec![
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(2, 1),
        ]);
        assert!(snake.head_hits_body());

        // Only the tail matches, which is not checked
        let snake = Snake::new(vec![
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(2, 2),
            Position::new(1, 1),
        ]);
        assert!(!snake.head_hits_body());
    }

    #[test]
    fn test_short_snake_never_collides() {
        let snake = Snake::new(vec![Position::new(3, 3), Position::new(3, 3)]);
        assert!(!snake.head_hits_body());
    }
}
