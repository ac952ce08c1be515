//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and level
//! sequencing. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals across a run
//! - **Testable**: Time is injected as a millisecond counter, never read
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`progression`]: Level to grid size, move and time allowances
//! - [`deck`]: Cards and shuffled pair assignment
//! - [`layout`]: Card rectangles for hit-testing and drawing
//! - [`round`]: One level's click protocol, flip-back deadline and outcome
//! - [`run`]: Level-to-level driver with end-of-round banners
//! - [`rng`]: Seeded uniform shuffle
//! - [`snapshot`]: Plain data handed to the renderer
//!
//! # Game Rules
//!
//! - Cards are revealed two at a time; a matching pair stays up for good
//! - A mismatched pair turns back over after 1 second, and no other card
//!   can be flipped until it does
//! - Clicks within 0.5 seconds of the last flip are ignored
//! - Revealing a pair costs one move on move-limited levels
//! - A round is won when every card is matched, lost when moves run out,
//!   and times out once the clock passes the level's allowance
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Run, RunPhase};
//! use tui_memory_types::{Level, Viewport};
//!
//! let mut run = Run::new(12345, Viewport::new(80, 24), 0);
//! assert_eq!(run.level(), Level::FIRST);
//!
//! // Level 1 is a 2x2 board with no move or time limit.
//! assert_eq!(run.round().cards().len(), 4);
//! assert_eq!(run.round().moves_remaining(), None);
//!
//! // Flip the top-left card.
//! assert!(run.select_at(0, 0, 1_000));
//! assert_eq!(run.tick(1_000), RunPhase::Playing);
//! ```

pub mod deck;
pub mod layout;
pub mod progression;
pub mod rng;
pub mod round;
pub mod run;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use deck::Card;
pub use layout::BoardLayout;
pub use progression::{budgets_for, level_up};
pub use rng::DeckRng;
pub use round::RoundState;
pub use run::{AfterBanner, Outcome, Run, RunPhase};
pub use snapshot::{CardSnapshot, RoundSnapshot, RunSnapshot};
