use crate::{Coords, GridInt};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Ordered body coordinates, head first, tail last.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Coords, size: GridInt, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..size)
            .map(|i| (head.0 - dx * i, head.1 - dy * i))
            .collect();
        Snake { body, direction }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ignores updates that would reverse the snake into its own neck.
    pub fn set_direction(&mut self, new_direction: Direction) {
        match (new_direction, self.direction) {
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left) => {}
            _ => self.direction = new_direction,
        }
    }

    /// Where the head lands on the next step, which may be off the grid.
    pub fn next_head(&self) -> Coords {
        let (dx, dy) = self.direction.delta();
        let (x, y) = self.head();
        (x + dx, y + dy)
    }

    /// Advances one cell in the current direction. Returns the vacated tail
    /// coordinate, or None when growing (the tail stays put).
    pub fn step(&mut self, grow: bool) -> Option<Coords> {
        let new_head = self.next_head();
        self.body.insert(0, new_head);

        if grow {
            None
        } else {
            self.body.pop()
        }
    }

    /// Whether a coordinate sits on any segment other than the head.
    pub fn hits_body(&self, pos: Coords) -> bool {
        self.body[1..].contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_seeds_behind_head() {
        let snake = Snake::new((5, 5), 3, Right);
        assert_eq!(snake.body(), &[(5, 5), (4, 5), (3, 5)]);
        assert_eq!(snake.head(), (5, 5));
    }

    #[test]
    fn step_without_growth_vacates_tail() {
        let mut snake = Snake::new((5, 5), 3, Right);
        let vacated = snake.step(false);
        assert_eq!(vacated, Some((3, 5)));
        assert_eq!(snake.body(), &[(6, 5), (5, 5), (4, 5)]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn step_with_growth_keeps_tail() {
        let mut snake = Snake::new((5, 5), 3, Right);
        let vacated = snake.step(true);
        assert_eq!(vacated, None);
        assert_eq!(snake.body(), &[(6, 5), (5, 5), (4, 5), (3, 5)]);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new((5, 5), 3, Right);
        snake.set_direction(Left);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.next_head(), (6, 5));
    }

    #[test]
    fn perpendicular_turn_is_applied() {
        let mut snake = Snake::new((5, 5), 3, Right);
        snake.set_direction(Down);
        assert_eq!(snake.direction(), Down);
        assert_eq!(snake.next_head(), (5, 6));
    }

    #[test]
    fn hits_body_excludes_head() {
        let snake = Snake::new((5, 5), 3, Right);
        assert!(!snake.hits_body((5, 5)));
        assert!(snake.hits_body((4, 5)));
        assert!(snake.hits_body((3, 5)));
        assert!(!snake.hits_body((6, 5)));
    }
}
