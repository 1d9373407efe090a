//! Terminal presentation for the snake game.
//!
//! Renders snapshots into a plain framebuffer that is diffed and flushed to a
//! crossterm backend. No widget toolkit: the board is drawn glyph by glyph so
//! the aspect ratio stays under control (2 columns per grid cell).
//!
//! Also home to the terminal bell, which is the only sound a terminal has.

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use audio::BellAudio;
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{AnchorY, GameView, ProfileView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
