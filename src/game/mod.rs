//! Core game logic module for Snake
//!
//! Everything here is a deterministic state transformer driven by frame time and
//! input. Nothing in this module draws, plays sound or reads the keyboard.

pub mod food;
pub mod grid;
pub mod score;
pub mod screen;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use food::FoodSpawner;
pub use grid::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};
pub use score::{HighscoreFile, ScoreStore};
pub use screen::{FrameInput, Game, Screen, ScreenEvent, TICK_INTERVAL};
pub use snake::{CapacityExceeded, SNAKE_MAX_LENGTH, Segment, Snake};
pub use state::{GameState, TickResult};
