//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is then flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot in, framebuffer out
//! - Own the terminal through a guard that always restores it

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Anchor, GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use session::TerminalSession;
