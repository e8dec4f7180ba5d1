use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

use crate::grid::{Direction, Point};
use crate::snake::Snake;
use crate::GridInt;

use rand::Rng;

const INITIAL_HEAD: Point = Point { x: 5, y: 5 };

/// Startup failures. Everything after construction is a normal state
/// transition, not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// The host supplied a board with no interior to play in.
    DegenerateBoard,
    /// The segment buffer could not be reserved.
    AllocationFailure,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::DegenerateBoard => write!(f, "board dimensions must be positive"),
            GameError::AllocationFailure => write!(f, "failed to allocate the game state"),
        }
    }
}

impl Error for GameError {}

impl From<TryReserveError> for GameError {
    fn from(_: TryReserveError) -> Self {
        GameError::AllocationFailure
    }
}

/// Render-relevant state handed back after every tick.
pub struct Frame<'a> {
    pub segments: &'a [Point],
    pub food: Point,
    pub tail_index: usize,
    pub running: bool,
}

#[derive(Debug)]
pub struct Game {
    snake: Snake,
    food: Point,
    rows: GridInt,
    cols: GridInt,
    running: bool,
}

impl Game {
    /// Starts a game on a `rows` x `cols` board: a two-segment snake heading
    /// right from the fixed start, food somewhere random, running.
    pub fn new(rows: GridInt, cols: GridInt) -> Result<Self, GameError> {
        if rows <= 0 || cols <= 0 {
            return Err(GameError::DegenerateBoard);
        }

        let snake = Snake::new(INITIAL_HEAD, Direction::Right)?;
        let food = random_point(rows, cols);
        Ok(Game { snake, food, rows, cols, running: true })
    }

    /// Runs one turn: apply the requested turn, step the snake, then check
    /// walls and self-collision (either one ends the game) and finally food.
    /// Once terminated this is a no-op that keeps returning the final frame.
    pub fn tick(&mut self, requested: Option<Direction>) -> Frame<'_> {
        if self.running {
            if let Some(direction) = requested {
                self.snake.set_heading(direction);
            }

            self.snake.advance();

            if self.snake.hits_wall(self.rows, self.cols) || self.snake.hits_self() {
                self.running = false;
            } else if self.snake.head() == self.food {
                self.snake.grow();
                self.food = random_point(self.rows, self.cols);
            }
        }

        self.frame()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            segments: self.snake.segments(),
            food: self.food,
            tail_index: self.snake.tail_index(),
            running: self.running,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }
}

fn random_point(rows: GridInt, cols: GridInt) -> Point {
    let mut rng = rand::thread_rng();
    Point::new(rng.gen_range(0..rows), rng.gen_range(0..cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::MAX_SNAKE_LEN;
    use Direction::*;

    fn in_bounds(p: Point, rows: GridInt, cols: GridInt) -> bool {
        (0..rows).contains(&p.x) && (0..cols).contains(&p.y)
    }

    #[test]
    fn new_game_rejects_degenerate_boards() {
        assert_eq!(Game::new(0, 20).unwrap_err(), GameError::DegenerateBoard);
        assert_eq!(Game::new(20, 0).unwrap_err(), GameError::DegenerateBoard);
        assert_eq!(Game::new(-3, 20).unwrap_err(), GameError::DegenerateBoard);
    }

    #[test]
    fn new_game_starts_running_with_food_in_bounds() {
        let game = Game::new(20, 20).unwrap();
        assert!(game.running());

        let frame = game.frame();
        assert_eq!(frame.segments, &[Point::new(5, 5), Point::new(4, 5)]);
        assert_eq!(frame.tail_index, 1);
        assert!(in_bounds(frame.food, 20, 20));
    }

    #[test]
    fn plain_tick_moves_the_head_right() {
        let mut game = Game::new(20, 20).unwrap();
        game.food = Point::new(15, 15); // off the snake's path

        let frame = game.tick(None);
        assert!(frame.running);
        assert_eq!(frame.segments, &[Point::new(6, 5), Point::new(5, 5)]);
    }

    #[test]
    fn eating_food_grows_and_respawns_it() {
        let mut game = Game::new(20, 20).unwrap();
        game.food = Point::new(6, 5); // one cell ahead of the head

        let frame = game.tick(None);
        assert!(frame.running);
        assert_eq!(frame.segments.len(), 3);
        assert_eq!(frame.segments[0], Point::new(6, 5));
        assert_eq!(frame.tail_index, 2);
        assert!(in_bounds(frame.food, 20, 20));
    }

    #[test]
    fn reversal_through_tick_is_ignored() {
        let mut game = Game::new(20, 20).unwrap();
        game.food = Point::new(15, 15);

        // Heading is Right; a Left request must not apply.
        let frame = game.tick(Some(Left));
        assert_eq!(frame.segments[0], Point::new(6, 5));
    }

    #[test]
    fn driving_into_the_top_wall_terminates() {
        let mut game = Game::new(20, 20).unwrap();
        game.food = Point::new(15, 15);

        // Head starts at y = 5; the fifth step up reaches y = 0.
        game.tick(Some(Up));
        for _ in 0..3 {
            assert!(game.tick(None).running);
        }
        let frame = game.tick(None);
        assert!(!frame.running);
        assert_eq!(frame.segments[0], Point::new(5, 0));
    }

    #[test]
    fn tick_after_termination_changes_nothing() {
        let mut game = Game::new(20, 20).unwrap();
        game.food = Point::new(15, 15);
        game.running = false;

        let frame = game.tick(Some(Down));
        assert!(!frame.running);
        assert_eq!(frame.segments, &[Point::new(5, 5), Point::new(4, 5)]);
    }

    #[test]
    fn snake_caps_out_on_a_food_column() {
        let mut game = Game::new(50, 50).unwrap();

        // Feed the snake every tick until well past the cap.
        for step in 0..MAX_SNAKE_LEN + 3 {
            game.food = Point::new(6 + step as GridInt, 5);
            assert!(game.tick(None).running);
        }
        assert_eq!(game.frame().segments.len(), MAX_SNAKE_LEN);
    }
}
