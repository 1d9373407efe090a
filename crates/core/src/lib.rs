//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, timers, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Ticks can be driven synchronously, no real timers needed
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on the tick path
//!
//! # Module Structure
//!
//! - [`config`]: board geometry, grid step, food points, spawn cell
//! - [`game_state`]: the engine: phase machine, direction intents, tick
//! - [`snake`]: ordered body cells with tail-aware collision checks
//! - [`rng`]: seedable LCG used for food placement
//! - [`snapshot`]: immutable copy of the state for renderers and observers
//! - [`observer`]: hook for collaborators (audio, persistence)
//!
//! # Game Rules
//!
//! - The snake moves one grid step per tick in the pending direction
//! - A direction that reverses the last committed direction is ignored
//! - Leaving the board or hitting the body ends the game
//! - The tail cell is vacated before the body check on a non-eating tick,
//!   so chasing your own tail is allowed
//! - Eating food adds `food_points` and grows the snake by one
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, Phase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), Phase::Idle);
//!
//! game.start();
//! game.change_direction(Direction::Up);
//! game.tick();
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.direction(), Direction::Up);
//! ```
//!
//! # Timing
//!
//! [`GameState::tick`](game_state::GameState::tick) is a fixed logical step; it
//! takes no elapsed time. Pacing belongs to the scheduler that calls it.

pub mod config;
pub mod game_state;
pub mod observer;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig, MAX_GRID_CELLS};
pub use game_state::{EventQueue, GameState};
pub use observer::GameObserver;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
