//! Keyboard mapping - crossterm key events to game actions.

use crate::types::{Dir, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate one key press into a game action, if it maps to one.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Move(Dir::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Move(Dir::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Move(Dir::Down))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Move(Dir::Up))
        }

        // Gesture
        KeyCode::Char(' ') => Some(GameAction::Touch),
        KeyCode::Enter => Some(GameAction::Release),
        KeyCode::Esc => Some(GameAction::Cancel),

        _ => None,
    }
}

/// Quit keys: `q` or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
