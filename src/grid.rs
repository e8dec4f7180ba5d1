use crate::GridInt;
use Direction::*;

/// A cell on the game grid. Signed so that stepping off the left or top
/// edge stays representable until the wall check runs.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: GridInt,
    pub y: GridInt,
}

impl Point {
    pub fn new(x: GridInt, y: GridInt) -> Self {
        Point { x, y }
    }

    /// Returns the point shifted one cell along `direction`. Y grows downward.
    pub fn translate(self, direction: Direction) -> Self {
        match direction {
            Left => Point { x: self.x - 1, ..self },
            Right => Point { x: self.x + 1, ..self },
            Up => Point { y: self.y - 1, ..self },
            Down => Point { y: self.y + 1, ..self },
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_one_cell_per_axis() {
        let p = Point::new(5, 5);
        assert_eq!(p.translate(Left), Point::new(4, 5));
        assert_eq!(p.translate(Right), Point::new(6, 5));
        assert_eq!(p.translate(Up), Point::new(5, 4));
        assert_eq!(p.translate(Down), Point::new(5, 6));
    }

    #[test]
    fn translate_is_pure() {
        let p = Point::new(0, 0);
        let _ = p.translate(Right);
        assert_eq!(p, Point::new(0, 0));

        // Off-grid results are representable; bounds are the engine's problem.
        assert_eq!(p.translate(Left), Point::new(-1, 0));
        assert_eq!(p.translate(Up), Point::new(0, -1));
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Down.opposite(), Up);
        assert_eq!(Left.opposite(), Right);
        assert_eq!(Right.opposite(), Left);
    }
}
