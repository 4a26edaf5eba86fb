//! Compile-time settings for both front ends. Nothing here is read at runtime.

use std::time::Duration;

use crate::GridInt;

// Terminal variant
pub const TERM_WIDTH: GridInt = 40;
pub const TERM_HEIGHT: GridInt = 20;
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const FINAL_SCORE_HOLD: Duration = Duration::from_secs(3);
/// How long the input thread blocks before re-checking whether it should stop.
pub const INPUT_POLL: Duration = Duration::from_millis(50);

// Windowed variant
pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const GRID_SIZE: i32 = 20;
/// Frames between two simulation steps.
pub const UPDATE_DELAY: u32 = 10;
pub const WINDOW_TITLE: &str = "Snake Game";

pub const fn window_cols() -> GridInt {
    SCREEN_WIDTH / GRID_SIZE
}

pub const fn window_rows() -> GridInt {
    SCREEN_HEIGHT / GRID_SIZE
}

pub const DEFAULT_LOG_FILTER: &str = "warn";
