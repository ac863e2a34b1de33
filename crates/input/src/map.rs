//! Key mapping from terminal events to game inputs.

use crate::types::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game input.
///
/// Keys with no meaning in the game map to `None` and are dropped by the driver.
pub fn map_key_event(key: KeyEvent) -> Option<Input> {
    if should_quit(key) {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Input::MoveUp),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Input::MoveDown),
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Input::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Input::MoveRight),
        KeyCode::Enter => Some(Input::Confirm),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
