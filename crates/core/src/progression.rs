//! Difficulty progression - per-level budgets
//!
//! A pure mapping from [`Level`] to [`Budgets`]. The grid grows 2x2, 4x4,
//! 6x6 over the first three levels and then stays at 6x6; from there the
//! time allowance (levels 5+) and a move allowance (levels 9+) carry the
//! difficulty.

use crate::types::{
    Budgets, Level, LIMITED_MOVE_BUDGET, MAX_GRID_DIMENSION, MAX_LEVEL, TIME_BUDGET_FLOOR_SECS,
};

/// Cards per side for a level. Always even.
pub fn grid_dimension(level: Level) -> u8 {
    match level.get() {
        1 => 2,
        2 => 4,
        _ => MAX_GRID_DIMENSION,
    }
}

/// Pairs a player may reveal before losing, or `None` when unlimited.
pub fn move_budget(level: Level) -> Option<u32> {
    match level.get() {
        1..=8 => None,
        _ => Some(LIMITED_MOVE_BUDGET),
    }
}

/// Time allowance in seconds before clamping.
///
/// Levels 13-15 come out at 0, -30 and -60; see [`time_budget_secs`].
pub fn raw_time_budget_secs(level: Level) -> Option<i32> {
    let n = level.get() as i32;
    match n {
        1..=4 => None,
        5..=8 => Some(300 - (n - 5) * 50),
        _ => Some(120 - (n - 9) * 30),
    }
}

/// Time allowance in seconds, or `None` when untimed.
///
/// Never below [`TIME_BUDGET_FLOOR_SECS`].
pub fn time_budget_secs(level: Level) -> Option<u32> {
    raw_time_budget_secs(level).map(|secs| secs.max(TIME_BUDGET_FLOOR_SECS) as u32)
}

/// All budgets for a level.
pub fn budgets_for(level: Level) -> Budgets {
    Budgets {
        grid_dimension: grid_dimension(level),
        move_budget: move_budget(level),
        time_budget_secs: time_budget_secs(level),
    }
}

/// Next level, saturating at the last one.
pub fn level_up(current: Level) -> Level {
    Level::new(current.get().saturating_add(1).min(MAX_LEVEL)).unwrap_or(Level::LAST)
}
