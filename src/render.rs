//! Drawing the game onto whatever surface a front end provides.
//!
//! Rendering never feeds back into the game: [`draw`] only reads the state
//! and issues [`Canvas`] calls.

use crate::Cell;
use crate::game::GameState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paint {
    /// Top and bottom rows of the wall.
    WallHorizontal,
    /// Left and right columns of the wall.
    WallVertical,
    Snake,
    Food,
}

/// Where a line of text goes; each canvas decides what that means in its
/// own units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anchor {
    Status,
    Centered,
}

pub trait Canvas {
    fn clear(&mut self);
    fn fill(&mut self, cell: Cell, paint: Paint);
    fn text(&mut self, anchor: Anchor, text: &str);
}

pub fn status_line(state: &GameState) -> Option<String> {
    let rules = state.rules();

    if state.is_over() && rules.restartable {
        Some("Game Over! Press R to Restart".to_string())
    } else if rules.scored {
        Some(format!("Score: {}", state.score()))
    } else {
        None
    }
}

pub fn final_message(score: u32) -> String {
    format!("Game Over! Final Score: {}", score)
}

pub fn draw<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.clear();

    let bounds = &state.rules().bounds;
    if bounds.bordered {
        for x in 0..bounds.width {
            canvas.fill((x, 0), Paint::WallHorizontal);
            canvas.fill((x, bounds.height - 1), Paint::WallHorizontal);
        }
        for y in 0..bounds.height {
            canvas.fill((0, y), Paint::WallVertical);
            canvas.fill((bounds.width - 1, y), Paint::WallVertical);
        }
    }

    for cell in state.snake().cells() {
        canvas.fill(cell, Paint::Snake);
    }
    canvas.fill(state.food(), Paint::Food);

    if let Some(status) = status_line(state) {
        canvas.text(Anchor::Status, &status);
    }
}

/// The screen shown once a non-restartable game has ended.
pub fn draw_final<C: Canvas + ?Sized>(score: u32, canvas: &mut C) {
    canvas.clear();
    canvas.text(Anchor::Centered, &final_message(score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::snake::{Direction, Snake};

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Fill(Cell, Paint),
        Text(Anchor, String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Canvas for Recorder {
        fn clear(&mut self) {
            self.0.push(Op::Clear);
        }

        fn fill(&mut self, cell: Cell, paint: Paint) {
            self.0.push(Op::Fill(cell, paint));
        }

        fn text(&mut self, anchor: Anchor, text: &str) {
            self.0.push(Op::Text(anchor, text.to_string()));
        }
    }

    fn state(rules: Rules) -> GameState {
        let snake = Snake::from_cells([(3, 2), (2, 2)]).unwrap();
        GameState::from_parts(rules, snake, Direction::Right, (5, 4))
    }

    #[test]
    fn windowed_frame() {
        let mut canvas = Recorder::default();
        draw(&state(Rules::windowed(8, 6)), &mut canvas);

        assert_eq!(canvas.0, vec![
            Op::Clear,
            Op::Fill((3, 2), Paint::Snake),
            Op::Fill((2, 2), Paint::Snake),
            Op::Fill((5, 4), Paint::Food),
            Op::Text(Anchor::Status, "Score: 0".to_string()),
        ]);
    }

    #[test]
    fn bordered_frame_draws_walls_first() {
        let mut canvas = Recorder::default();
        draw(&state(Rules::bordered(8, 6)), &mut canvas);

        assert_eq!(canvas.0[0], Op::Clear);
        let walls = canvas.0.iter()
            .filter(|op| matches!(op, Op::Fill(_, Paint::WallHorizontal | Paint::WallVertical)))
            .count();
        assert_eq!(walls, 2 * 8 + 2 * 6);

        let first_snake = canvas.0.iter().position(|op| matches!(op, Op::Fill(_, Paint::Snake))).unwrap();
        assert_eq!(first_snake, 1 + walls);
    }

    #[test]
    fn status_line_per_variant() {
        let mut windowed = state(Rules::windowed(8, 6));
        assert_eq!(status_line(&windowed).as_deref(), Some("Score: 0"));
        windowed.quit();
        assert_eq!(status_line(&windowed).as_deref(), Some("Game Over! Press R to Restart"));

        let mut bordered = state(Rules::bordered(8, 6));
        bordered.quit();
        assert_eq!(status_line(&bordered).as_deref(), Some("Score: 0"));

        assert_eq!(status_line(&state(Rules::bordered(8, 6).unscored())), None);
    }

    #[test]
    fn final_screen_only_has_the_message() {
        let mut canvas = Recorder::default();
        draw_final(7, &mut canvas);

        assert_eq!(canvas.0, vec![
            Op::Clear,
            Op::Text(Anchor::Centered, "Game Over! Final Score: 7".to_string()),
        ]);
    }
}
