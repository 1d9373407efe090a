//! Score persistence for the snake game.
//!
//! Finished games are recorded per player in a local JSON file. The game loop
//! never touches the file: it hands scores to a [`ScoreReporter`], whose tokio
//! task does the I/O and publishes the updated [`Profile`] back.
//!
//! # Environment Variables
//!
//! - `SNAKE_SCORE_PATH`: store file (default: `snake_scores.json` in the temp dir)
//! - `SNAKE_USER_ID`: player id (default: `$USER`, then `local`)
//! - `SNAKE_PERSIST_DISABLED`: set to "1" or "true" to disable persistence

pub mod reporter;
pub mod store;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use reporter::{run_writer, ReportSink, ReporterConfig, ScoreReporter};
pub use store::{user_key, Profile, ScoreStore, StoreError};
