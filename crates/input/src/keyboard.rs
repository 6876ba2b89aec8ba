//! Blocking keyboard action source.

use anyhow::Result;
use crossterm::event;

use tui_2048_core::ActionSource;

use crate::map::action_from_event;
use crate::types::Action;

/// Reads crossterm events until one maps to an action.
///
/// Expects the terminal to be in raw mode so single keystrokes arrive
/// without Enter.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl ActionSource for KeyboardInput {
    fn next_action(&mut self) -> Result<Action> {
        loop {
            let ev = event::read()?;
            if let Some(action) = action_from_event(&ev) {
                return Ok(action);
            }
        }
    }
}
