//! Keyboard cursor over the card grid.
//!
//! Lets the game be played without mouse reporting. The cursor only tracks a
//! grid position; flipping goes through the same click path as the mouse.

use crate::types::MemoryAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardCursor {
    row: u8,
    col: u8,
}

impl BoardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Move within a `dimension x dimension` grid. Returns `true` if the
    /// action was a cursor move (even when blocked by an edge).
    pub fn apply(&mut self, action: MemoryAction, dimension: u8) -> bool {
        let last = dimension.saturating_sub(1);
        match action {
            MemoryAction::CursorUp => self.row = self.row.saturating_sub(1),
            MemoryAction::CursorDown => self.row = (self.row + 1).min(last),
            MemoryAction::CursorLeft => self.col = self.col.saturating_sub(1),
            MemoryAction::CursorRight => self.col = (self.col + 1).min(last),
            MemoryAction::Flip => return false,
        }
        true
    }

    /// Pull the cursor back inside a smaller grid (new level, or reset).
    pub fn clamp(&mut self, dimension: u8) {
        let last = dimension.saturating_sub(1);
        self.row = self.row.min(last);
        self.col = self.col.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_and_stops_at_edges() {
        let mut c = BoardCursor::new();
        assert!(c.apply(MemoryAction::CursorUp, 4));
        assert_eq!(c.position(), (0, 0));

        c.apply(MemoryAction::CursorRight, 4);
        c.apply(MemoryAction::CursorDown, 4);
        assert_eq!(c.position(), (1, 1));

        for _ in 0..10 {
            c.apply(MemoryAction::CursorRight, 4);
            c.apply(MemoryAction::CursorDown, 4);
        }
        assert_eq!(c.position(), (3, 3));
    }

    #[test]
    fn test_flip_is_not_a_move() {
        let mut c = BoardCursor::new();
        assert!(!c.apply(MemoryAction::Flip, 2));
        assert_eq!(c.position(), (0, 0));
    }

    #[test]
    fn test_clamp_to_smaller_grid() {
        let mut c = BoardCursor::new();
        for _ in 0..5 {
            c.apply(MemoryAction::CursorDown, 6);
            c.apply(MemoryAction::CursorRight, 6);
        }
        assert_eq!(c.position(), (5, 5));
        c.clamp(2);
        assert_eq!(c.position(), (1, 1));
    }
}
