//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! phase-aware [`InputHandler`] that turns "press any key" into `Start` while no
//! game is in progress.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
