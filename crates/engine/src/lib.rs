//! Engine driver: fixed-rate scheduling and serialized access to the game.
//!
//! The core `GameState` is a timer-agnostic step function. This crate supplies
//! the two things around it:
//!
//! - [`TickClock`]: decides when the next fixed step is due. Missed steps are
//!   dropped, never replayed.
//! - [`Session`]: the single writer. Every intent and tick goes through it; after
//!   each call it publishes one complete snapshot and fans the call's events out
//!   to registered [`GameObserver`](tui_snake_core::GameObserver)s.

pub mod clock;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::TickClock;
pub use session::Session;
