use std::collections::TryReserveError;

use crate::grid::{Direction, Point};
use crate::GridInt;

/// Hard cap on the number of body segments. The segment buffer is reserved
/// up front and `grow` becomes a no-op once it is full.
pub const MAX_SNAKE_LEN: usize = 10;

#[derive(Debug)]
pub struct Snake {
    body: Vec<Point>, // head at index 0
    heading: Direction,
}

impl Snake {
    /// Builds a two-segment snake: the head at `head`, the tail one cell
    /// behind it relative to `heading`.
    pub fn new(head: Point, heading: Direction) -> Result<Self, TryReserveError> {
        let mut body = Vec::new();
        body.try_reserve_exact(MAX_SNAKE_LEN)?;
        body.push(head);
        body.push(head.translate(heading.opposite()));
        Ok(Snake { body, heading })
    }

    pub fn segments(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Index of the last segment, shown in the status line.
    pub fn tail_index(&self) -> usize {
        self.body.len() - 1
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Applies a requested turn. A request for the exact opposite of the
    /// current heading is silently ignored, so the snake can never reverse
    /// into its own neck.
    pub fn set_heading(&mut self, requested: Direction) {
        if requested != self.heading.opposite() {
            self.heading = requested;
        }
    }

    /// Moves the whole chain one step: each segment takes its predecessor's
    /// cell, tail first, then the head steps along the heading.
    pub fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].translate(self.heading);
    }

    pub fn hits_self(&self) -> bool {
        self.body[1..].contains(&self.body[0])
    }

    /// The playable interior is the open rectangle: the border rows and
    /// columns themselves are lethal. `rows` bounds X and `cols` bounds Y;
    /// the host passes the terminal width as `rows` and the height as `cols`.
    pub fn hits_wall(&self, rows: GridInt, cols: GridInt) -> bool {
        let head = self.body[0];
        head.x <= 0 || head.y <= 0 || head.x >= rows || head.y >= cols
    }

    /// Appends one segment behind the tail, extending away from the
    /// direction of travel. Does nothing once the cap is reached.
    pub fn grow(&mut self) {
        if self.body.len() == MAX_SNAKE_LEN {
            return;
        }

        let tail = *self.body.last().unwrap();
        self.body.push(tail.translate(self.heading.opposite()));
    }
}
