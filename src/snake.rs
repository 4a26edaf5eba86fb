use std::collections::VecDeque;

use crate::{Cell, GridInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit vector in grid coordinates, y grows downwards.
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn offset(self, cell: Cell) -> Cell {
        let (dx, dy) = self.delta();
        (cell.0 + dx, cell.1 + dy)
    }
}

/// The snake's body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Snake { body: VecDeque::from([head]) }
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for an
    /// empty body.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Prepends `new_head`. Unless `grow` is set the tail is dropped and
    /// returned, so the length stays the same.
    pub fn advance(&mut self, new_head: Cell, grow: bool) -> Option<Cell> {
        self.body.push_front(new_head);
        if grow {
            None
        } else {
            self.body.pop_back()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversals() {
        assert!(Left.is_reverse_of(Right));
        assert!(Up.is_reverse_of(Down));
        assert!(!Up.is_reverse_of(Left));
        assert!(!Up.is_reverse_of(Up));
    }

    #[test]
    fn offset_follows_screen_coordinates() {
        assert_eq!(Up.offset((3, 3)), (3, 2));
        assert_eq!(Down.offset((3, 3)), (3, 4));
        assert_eq!(Left.offset((3, 3)), (2, 3));
        assert_eq!(Right.offset((3, 3)), (4, 3));
    }

    #[test]
    fn advance_moves_or_grows() {
        let mut snake = Snake::from_cells([(5, 5), (4, 5)]).unwrap();

        let dropped = snake.advance((6, 5), false);
        assert_eq!(dropped, Some((4, 5)));
        assert_eq!(snake.cells().collect::<Vec<_>>(), vec![(6, 5), (5, 5)]);

        let dropped = snake.advance((7, 5), true);
        assert_eq!(dropped, None);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), (7, 5));
        assert_eq!(snake.tail(), (5, 5));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(Snake::from_cells(Vec::new()).is_none());
    }
}
