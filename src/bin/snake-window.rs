//! Windowed front end: 32x24 grid of 20px squares, arrows to steer, `R` to
//! start over once the snake has crashed.

use macroquad::color::{BLACK, Color, WHITE};
use macroquad::input::{KeyCode, is_key_down};
use macroquad::shapes::draw_rectangle;
use macroquad::text::{draw_text, measure_text};
use macroquad::window::{Conf, clear_background, next_frame};
use tracing::info;

use snake::Cell;
use snake::config::{GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, UPDATE_DELAY, WINDOW_TITLE, window_cols, window_rows};
use snake::driver::Driver;
use snake::game::GameState;
use snake::input::{HeldKeys, TickInput};
use snake::render::{Anchor, Canvas, Paint};
use snake::rules::Rules;

const SNAKE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const FOOD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const WALL_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const FONT_SIZE: u16 = 20;

/// Draws straight onto the macroquad frame buffer, one square per cell.
struct WindowCanvas {
    cell_size: f32,
}

impl Canvas for WindowCanvas {
    fn clear(&mut self) {
        clear_background(BLACK);
    }

    fn fill(&mut self, cell: Cell, paint: Paint) {
        let color = match paint {
            Paint::Snake => SNAKE_COLOR,
            Paint::Food => FOOD_COLOR,
            Paint::WallHorizontal | Paint::WallVertical => WALL_COLOR,
        };
        let size = self.cell_size;
        draw_rectangle(cell.0 as f32 * size, cell.1 as f32 * size, size, size, color);
    }

    fn text(&mut self, anchor: Anchor, text: &str) {
        let (x, y) = match anchor {
            Anchor::Status => (10.0, 20.0),
            Anchor::Centered => {
                let dims = measure_text(text, None, FONT_SIZE, 1.0);
                ((SCREEN_WIDTH as f32 - dims.width) / 2.0, SCREEN_HEIGHT as f32 / 2.0)
            },
        };
        draw_text(text, x, y, FONT_SIZE as f32, WHITE);
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Conf::default()
    }
}

/// Samples the keyboard for this frame. Steering goes through the reversal
/// check against the current direction right away, like held keys should.
fn poll_keys(state: &GameState) -> TickInput {
    let held = HeldKeys {
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
    };

    TickInput {
        steer: held.choose(state.direction()),
        restart: is_key_down(KeyCode::R),
        ..TickInput::default()
    }
}

async fn run() {
    let mut rng = rand::thread_rng();
    let mut state = GameState::new(Rules::windowed(window_cols(), window_rows()), &mut rng);
    let mut driver = Driver::every(UPDATE_DELAY);
    let mut canvas = WindowCanvas { cell_size: GRID_SIZE as f32 };

    info!(cols = window_cols(), rows = window_rows(), "game started");

    loop {
        let input = poll_keys(&state);
        driver.frame(&mut state, &input, &mut rng, &mut canvas);
        next_frame().await;
    }
}

fn main() {
    snake::logging::init();
    macroquad::Window::from_config(window_conf(), run());
}
