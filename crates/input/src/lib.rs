//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` events.
//! It maps key presses into [`crate::types::Action`] and provides a blocking
//! keyboard [`ActionSource`](tui_2048_core::ActionSource) for the controller loop.

pub mod keyboard;
pub mod map;

pub use tui_2048_types as types;

pub use keyboard::KeyboardInput;
pub use map::{action_from_event, handle_key_event};
