use rand::Rng;
use tracing::{debug, info};

use crate::Cell;
use crate::rules::Rules;
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

/// What a single call to [`GameState::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The game was already over, nothing changed.
    Idle,
    Moved { new_head: Cell, old_tail: Cell },
    Ate { new_head: Cell },
    Crashed(Crash),
    /// Food was eaten and no free cell is left for the next one.
    Won,
}

/// Everything one run of the game needs, owned by the loop that drives it.
#[derive(Clone, Debug)]
pub struct GameState {
    rules: Rules,
    snake: Snake,
    direction: Direction,
    food: Cell,
    score: u32,
    over: bool,
}

impl GameState {
    /// Single-cell snake in the middle of the grid, food placed per the rules.
    pub fn new<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> Self {
        let snake = Snake::new(rules.bounds.center());
        let food = rules.food.place(&rules.bounds, &snake, rng);
        let over = food.is_none();

        GameState {
            rules,
            food: food.unwrap_or_else(|| snake.head()),
            snake,
            direction: rules.start_direction,
            score: 0,
            over,
        }
    }

    pub fn from_parts(rules: Rules, snake: Snake, direction: Direction, food: Cell) -> Self {
        GameState { rules, snake, direction, food, score: 0, over: false }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Changes direction unless `dir` would turn the snake back onto itself.
    /// Returns whether the request was accepted.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir.is_reverse_of(self.direction) {
            return false;
        }

        self.direction = dir;
        true
    }

    /// Ends the game without touching the board.
    pub fn quit(&mut self) {
        if !self.over {
            info!(score = self.score, "game quit");
        }
        self.over = true;
    }

    /// Reinitialises the whole state. Only honoured once the game is over
    /// and the rules allow restarting.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.over || !self.rules.restartable {
            return false;
        }

        *self = GameState::new(self.rules, rng);
        info!("game restarted");
        true
    }

    /// Advances the game by one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        if self.over {
            return StepOutcome::Idle;
        }

        let new_head = self.direction.offset(self.snake.head());

        let crash = if !self.rules.bounds.is_playable(new_head) {
            Some(Crash::Wall)
        } else if self.snake.contains(&new_head) {
            Some(Crash::Body)
        } else {
            None
        };

        if let Some(crash) = crash {
            self.over = true;
            info!(?crash, score = self.score, length = self.snake.len(), "game over");
            return StepOutcome::Crashed(crash);
        }

        if new_head != self.food {
            let old_tail = self.snake.advance(new_head, false).unwrap_or(new_head);
            debug!(?new_head, "moved");
            return StepOutcome::Moved { new_head, old_tail };
        }

        self.snake.advance(new_head, true);
        if self.rules.scored {
            self.score += 1;
        }
        debug!(?new_head, score = self.score, "ate food");

        match self.rules.food.place(&self.rules.bounds, &self.snake, rng) {
            Some(food) => {
                self.food = food;
                StepOutcome::Ate { new_head }
            },
            None => {
                self.over = true;
                info!(score = self.score, "board filled");
                StepOutcome::Won
            },
        }
    }
}
