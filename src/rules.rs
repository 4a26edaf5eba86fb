//! The knobs that tell the game variants apart.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::snake::{Direction, Snake};
use crate::{Cell, GridInt};

/// Grid dimensions and whether the outermost ring is a drawn wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: GridInt,
    pub height: GridInt,
    pub bordered: bool,
}

impl Bounds {
    /// Inclusive range of columns the snake may occupy.
    pub fn x_range(&self) -> (GridInt, GridInt) {
        if self.bordered { (1, self.width - 2) } else { (0, self.width - 1) }
    }

    /// Inclusive range of rows the snake may occupy.
    pub fn y_range(&self) -> (GridInt, GridInt) {
        if self.bordered { (1, self.height - 2) } else { (0, self.height - 1) }
    }

    pub fn is_playable(&self, cell: Cell) -> bool {
        let (min_x, max_x) = self.x_range();
        let (min_y, max_y) = self.y_range();
        (min_x..=max_x).contains(&cell.0) && (min_y..=max_y).contains(&cell.1)
    }

    pub fn playable_cells(&self) -> impl Iterator<Item = Cell> {
        let (min_x, max_x) = self.x_range();
        let (min_y, max_y) = self.y_range();
        (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| (x, y)))
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FoodPolicy {
    /// Any playable cell, including ones under the snake.
    Uniform,
    /// Only playable cells the snake does not occupy.
    AvoidSnake,
}

impl FoodPolicy {
    /// Picks the next food cell. `None` means the snake fills every
    /// candidate cell, which can only happen with [`FoodPolicy::AvoidSnake`].
    pub fn place<R: Rng + ?Sized>(self, bounds: &Bounds, snake: &Snake, rng: &mut R) -> Option<Cell> {
        match self {
            FoodPolicy::Uniform => {
                let (min_x, max_x) = bounds.x_range();
                let (min_y, max_y) = bounds.y_range();
                Some((rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y)))
            },
            FoodPolicy::AvoidSnake => {
                let choices: Vec<Cell> = bounds.playable_cells().filter(|pos| !snake.contains(pos)).collect();
                choices.choose(rng).copied()
            },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    pub bounds: Bounds,
    pub food: FoodPolicy,
    pub scored: bool,
    pub restartable: bool,
    pub start_direction: Direction,
}

impl Rules {
    /// Borderless grid, score shown, `R` restarts after game over.
    pub fn windowed(cols: GridInt, rows: GridInt) -> Self {
        Rules {
            bounds: Bounds { width: cols, height: rows, bordered: false },
            food: FoodPolicy::Uniform,
            scored: true,
            restartable: true,
            start_direction: Direction::Right,
        }
    }

    /// Grid whose outer ring is a wall; the game ends for good.
    pub fn bordered(width: GridInt, height: GridInt) -> Self {
        Rules {
            bounds: Bounds { width, height, bordered: true },
            food: FoodPolicy::Uniform,
            scored: true,
            restartable: false,
            start_direction: Direction::Right,
        }
    }

    pub fn with_food(self, food: FoodPolicy) -> Self {
        Rules { food, ..self }
    }

    pub fn unscored(self) -> Self {
        Rules { scored: false, ..self }
    }
}
