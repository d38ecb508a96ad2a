//! Snake - a small arcade Snake game
//!
//! This library provides:
//! - Core simulation and screen flow (game module), free of any window or audio code
//! - Settings loading (settings module)
//! - Keyboard mapping, audio cues and drawing on top of macroquad (input, audio, render)

pub mod audio;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;
