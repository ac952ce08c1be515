//! Mapping from terminal events to game input.

use crate::types::{MemoryAction, Point};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to cursor actions.
pub fn handle_key_event(key: KeyEvent) -> Option<MemoryAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(MemoryAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(MemoryAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(MemoryAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(MemoryAction::CursorDown)
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(MemoryAction::Flip),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Screen position of a left-button press. Other mouse events are ignored.
pub fn click_point(mouse: MouseEvent) -> Option<Point> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Point::new(mouse.column, mouse.row)),
        _ => None,
    }
}
