//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core rules, terminal rendering, input mapping).
//!
//! # Level Progression
//!
//! A run walks levels `1..=15`. Each level maps to a grid size and optional
//! move and time allowances (see `tui_memory_core::progression`):
//!
//! | Levels | Grid | Moves | Time |
//! |--------|------|-------|------|
//! | 1 | 2x2 | unlimited | unlimited |
//! | 2 | 4x4 | unlimited | unlimited |
//! | 3-4 | 6x6 | unlimited | unlimited |
//! | 5-8 | 6x6 | unlimited | 300s, 250s, 200s, 150s |
//! | 9-15 | 6x6 | 100 | 120s, 90s, 60s, then 30s floor |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds of the injected monotonic clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed loop interval (~60 FPS) |
//! | `DEBOUNCE_MS` | 500 | Clicks closer than this to the last flip are dropped |
//! | `FLIP_BACK_MS` | 1000 | Delay before a mismatched pair turns back over |
//! | `BANNER_CLEARED_MS` | 2000 | "Level cleared" banner |
//! | `BANNER_FAILED_MS` | 3000 | "Out of moves" / "Out of time" banner |
//! | `BANNER_COMPLETE_MS` | 5000 | "All levels complete" banner |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Level, Point, Rect, MAX_LEVEL};
//!
//! let level = Level::new(3).unwrap();
//! assert_eq!(level.get(), 3);
//! assert!(Level::new(0).is_none());
//! assert!(Level::new(MAX_LEVEL + 1).is_none());
//!
//! let rect = Rect::new(2, 1, 4, 2);
//! assert!(rect.contains(Point::new(5, 2)));
//! assert!(!rect.contains(Point::new(6, 2)));
//! ```

use serde::{Deserialize, Serialize};

/// First level of a run.
pub const MIN_LEVEL: u8 = 1;

/// Last level of a run (15 levels total).
pub const MAX_LEVEL: u8 = 15;

/// Fixed loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Clicks arriving sooner than this after the previous flip are ignored.
pub const DEBOUNCE_MS: u64 = 500;

/// A mismatched pair stays visible this long before turning face-down.
pub const FLIP_BACK_MS: u64 = 1000;

/// Banner duration after clearing a level.
pub const BANNER_CLEARED_MS: u64 = 2000;

/// Banner duration after running out of moves or time.
pub const BANNER_FAILED_MS: u64 = 3000;

/// Banner duration after clearing the final level.
pub const BANNER_COMPLETE_MS: u64 = 5000;

/// Move allowance for levels 9-15.
pub const LIMITED_MOVE_BUDGET: u32 = 100;

/// Lowest time allowance any level may have, in seconds.
///
/// The levels 9-15 curve (`120 - (level - 9) * 30`) reaches 0 and below from
/// level 13 on; those levels are clamped to this floor.
pub const TIME_BUDGET_FLOOR_SECS: i32 = 30;

/// Largest grid side; the board is capped at 6x6 from level 3 on.
pub const MAX_GRID_DIMENSION: u8 = 6;

/// Rows reserved above the board for the HUD.
pub const HUD_HEIGHT: u16 = 3;

/// Rows reserved below the board for the key hint line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Card width bounds in terminal columns.
pub const CARD_MIN_W: u16 = 4;
pub const CARD_MAX_W: u16 = 9;

/// Card height bounds in terminal rows.
pub const CARD_MIN_H: u16 = 1;
pub const CARD_MAX_H: u16 = 4;

/// Spacing between cards (columns, rows).
pub const CARD_GAP_X: u16 = 2;
pub const CARD_GAP_Y: u16 = 1;

/// Minimum interval between redraws of an unchanged frame.
pub const STATIC_RENDER_INTERVAL_MS: u64 = 250;

/// A validated level number in `MIN_LEVEL..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const FIRST: Level = Level(MIN_LEVEL);
    pub const LAST: Level = Level(MAX_LEVEL);

    /// Build a level, rejecting numbers outside the progression.
    pub fn new(n: u8) -> Option<Self> {
        (MIN_LEVEL..=MAX_LEVEL).contains(&n).then_some(Level(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_final(self) -> bool {
        self.0 == MAX_LEVEL
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::FIRST
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-level allowances.
///
/// `None` means unlimited. Serialized as `null`, never as a numeric infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Budgets {
    /// Cards per side; always even so the deck splits into pairs.
    pub grid_dimension: u8,
    pub move_budget: Option<u32>,
    pub time_budget_secs: Option<u32>,
}

impl Budgets {
    pub fn card_count(&self) -> usize {
        let side = self.grid_dimension as usize;
        side * side
    }

    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    pub fn time_budget_ms(&self) -> Option<u64> {
        self.time_budget_secs.map(|s| s as u64 * 1000)
    }
}

/// Result of evaluating a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    Playing,
    /// Every card is matched.
    Win,
    /// The move allowance is used up.
    Lose,
    /// The time allowance elapsed.
    Timeout,
}

impl Status {
    pub fn is_playing(self) -> bool {
        self == Status::Playing
    }
}

/// Full-screen message shown between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Banner {
    Cleared,
    OutOfTime,
    OutOfMoves,
    AllLevelsComplete,
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Banner::Cleared => "LEVEL CLEARED!",
            Banner::OutOfTime => "GAME OVER - OUT OF TIME",
            Banner::OutOfMoves => "GAME OVER - OUT OF MOVES",
            Banner::AllLevelsComplete => "ALL LEVELS COMPLETE!",
        }
    }

    pub fn duration_ms(self) -> u64 {
        match self {
            Banner::Cleared => BANNER_CLEARED_MS,
            Banner::OutOfTime | Banner::OutOfMoves => BANNER_FAILED_MS,
            Banner::AllLevelsComplete => BANNER_COMPLETE_MS,
        }
    }
}

/// Visual state of a card as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardFace {
    FaceDown,
    /// Face-up and waiting in the selection.
    FaceUp,
    Matched,
}

/// A pointer position in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in screen cells (half-open on the far edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && (p.x as u32) < self.x as u32 + self.w as u32
            && (p.y as u32) < self.y as u32 + self.h as u32
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(self.w / 2),
            self.y.saturating_add(self.h / 2),
        )
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Actions produced by the keyboard.
///
/// Mouse clicks bypass this and reach the round as a [`Point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Flip the card under the keyboard cursor.
    Flip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(DEBOUNCE_MS, 500);
        assert_eq!(FLIP_BACK_MS, 1000);
        assert_eq!(BANNER_CLEARED_MS, 2000);
        assert_eq!(BANNER_FAILED_MS, 3000);
        assert_eq!(BANNER_COMPLETE_MS, 5000);
    }

    #[test]
    fn level_bounds() {
        assert_eq!(Level::new(1), Some(Level::FIRST));
        assert_eq!(Level::new(15), Some(Level::LAST));
        assert_eq!(Level::new(0), None);
        assert_eq!(Level::new(16), None);
        assert!(Level::LAST.is_final());
        assert!(!Level::FIRST.is_final());
    }

    #[test]
    fn rect_edges_are_half_open() {
        let r = Rect::new(10, 5, 3, 2);
        assert!(r.contains(Point::new(10, 5)));
        assert!(r.contains(Point::new(12, 6)));
        assert!(!r.contains(Point::new(13, 5)));
        assert!(!r.contains(Point::new(10, 7)));
        assert!(!r.contains(Point::new(9, 5)));
        assert_eq!(r.center(), Point::new(11, 6));
    }

    #[test]
    fn rect_at_u16_edge_does_not_overflow() {
        let r = Rect::new(u16::MAX - 1, 0, 4, 1);
        assert!(r.contains(Point::new(u16::MAX, 0)));
    }

    #[test]
    fn unlimited_budgets_serialize_as_null() {
        let b = Budgets {
            grid_dimension: 2,
            move_budget: None,
            time_budget_secs: None,
        };
        let json = serde_json::to_value(b).unwrap();
        assert!(json["move_budget"].is_null());
        assert!(json["time_budget_secs"].is_null());
        assert_eq!(json["grid_dimension"], 2);
    }

    #[test]
    fn budgets_card_counts() {
        let b = Budgets {
            grid_dimension: 6,
            move_budget: Some(100),
            time_budget_secs: Some(120),
        };
        assert_eq!(b.card_count(), 36);
        assert_eq!(b.pair_count(), 18);
        assert_eq!(b.time_budget_ms(), Some(120_000));
    }

    #[test]
    fn failure_banners_share_duration() {
        assert_eq!(Banner::OutOfMoves.duration_ms(), Banner::OutOfTime.duration_ms());
        assert!(Banner::AllLevelsComplete.duration_ms() > Banner::Cleared.duration_ms());
    }
}
