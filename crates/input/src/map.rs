//! Key mapping from terminal events to game actions.

use crate::types::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letters are case-insensitive. Ctrl-C always exits, since raw mode swallows
/// the signal.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Exit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Left),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Down),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Right),

        // Session
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Exit),

        _ => None,
    }
}

/// Map a raw terminal event. Only key presses count; repeats and releases
/// are dropped so one keystroke is one turn.
pub fn action_from_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        _ => None,
    }
}
