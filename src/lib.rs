//! Single-player snake on a fixed pixel grid, drawn with ggez.

pub mod app;
pub mod apple;
pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod stats;

pub use app::SnakeApp;
pub use config::GameConfig;
pub use game::{Game, TickOutcome};
pub use grid::{Direction, Position};
