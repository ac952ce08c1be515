//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` mouse presses into board [`crate::types::Point`]s and key
//! events into [`crate::types::MemoryAction`]s, and provides a grid cursor
//! for playing from the keyboard.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::BoardCursor;
pub use map::{click_point, handle_key_event, should_quit};
