//! Snake on a fixed grid.
//!
//! The core (snake body, step function, input filtering, rendering onto a
//! [`render::Canvas`]) is independent of any backend. The `snake` binary
//! drives it on a terminal through crossterm, `snake-window` drives it in a
//! macroquad window.

pub mod config;
pub mod driver;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod rules;
pub mod snake;
pub mod term;

pub type GridInt = i32;
pub type Cell = (GridInt, GridInt);
