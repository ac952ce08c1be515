//! Round state module - one level's board from shuffle to outcome
//!
//! The round owns its cards, the selection buffer (at most two face-up,
//! unmatched cards), move and time accounting, and the deadline for turning
//! a mismatched pair back over.
//!
//! Time is never read from the system: every operation takes `now_ms`, a
//! monotonic millisecond counter supplied by the caller. The flip-back is a
//! stored deadline resolved by [`RoundState::tick`], so nothing here blocks.

use arrayvec::ArrayVec;

use crate::deck::{build_deck, Card};
use crate::layout::BoardLayout;
use crate::progression::budgets_for;
use crate::rng::DeckRng;
use crate::snapshot::{CardSnapshot, RoundSnapshot};
use crate::types::{Budgets, Level, Point, Status, Viewport, DEBOUNCE_MS, FLIP_BACK_MS};

#[derive(Debug, Clone)]
pub struct RoundState {
    level: Level,
    budgets: Budgets,
    cards: Vec<Card>,
    /// Deck indices of face-up, unmatched cards in click order.
    selection: ArrayVec<usize, 2>,
    /// `None` when moves are unlimited.
    moves_remaining: Option<u32>,
    started_at_ms: u64,
    last_flip_ms: Option<u64>,
    flip_back_at_ms: Option<u64>,
    layout: BoardLayout,
}

impl RoundState {
    /// Deal a freshly shuffled board for `level`, starting the clock at `now_ms`.
    pub fn new(level: Level, rng: &mut DeckRng, now_ms: u64) -> Self {
        let budgets = budgets_for(level);
        let cards = build_deck(budgets.grid_dimension, rng);
        log::info!(
            "level {} started: {}x{} grid, moves {:?}, time {:?}s",
            level,
            budgets.grid_dimension,
            budgets.grid_dimension,
            budgets.move_budget,
            budgets.time_budget_secs
        );
        Self::with_cards(level, budgets, cards, now_ms)
    }

    fn with_cards(level: Level, budgets: Budgets, cards: Vec<Card>, now_ms: u64) -> Self {
        Self {
            level,
            budgets,
            cards,
            selection: ArrayVec::new(),
            moves_remaining: budgets.move_budget,
            started_at_ms: now_ms,
            last_flip_ms: None,
            flip_back_at_ms: None,
            layout: BoardLayout::fit(budgets.grid_dimension, Viewport::default()),
        }
    }

    /// Build a round with a known deal (row-major values).
    #[cfg(test)]
    pub(crate) fn from_values(level: Level, values: &[u8], now_ms: u64) -> Self {
        let budgets = budgets_for(level);
        let cards = crate::deck::deal(budgets.grid_dimension, values);
        Self::with_cards(level, budgets, cards, now_ms)
    }

    /// Re-fit card rectangles after a terminal resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.layout = BoardLayout::fit(self.budgets.grid_dimension, viewport);
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn budgets(&self) -> &Budgets {
        &self.budgets
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn moves_remaining(&self) -> Option<u32> {
        self.moves_remaining
    }

    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    pub fn flip_back_pending(&self) -> bool {
        self.flip_back_at_ms.is_some()
    }

    /// Process a pointer click. Returns `true` if a card was flipped.
    ///
    /// Debounced, missed, already-visible and selection-full clicks are
    /// dropped without touching any state.
    pub fn handle_click(&mut self, point: Point, now_ms: u64) -> bool {
        if let Some(last) = self.last_flip_ms {
            if now_ms.saturating_sub(last) < DEBOUNCE_MS {
                return false;
            }
        }

        // A deadline that has already passed counts as fired.
        self.tick(now_ms);

        let layout = self.layout;
        let Some(index) = self
            .cards
            .iter()
            .position(|c| c.is_selectable() && layout.rect(c.row, c.col).contains(point))
        else {
            return false;
        };

        if self.selection.is_full() {
            return false;
        }

        self.cards[index].face_up = true;
        self.selection.push(index);
        self.last_flip_ms = Some(now_ms);

        if self.selection.is_full() {
            if let Some(moves) = self.moves_remaining.as_mut() {
                *moves = moves.saturating_sub(1);
            }
            self.check_match(now_ms);
        }

        true
    }

    /// Flip the card at a grid position, as if clicked at its centre.
    pub fn select_at(&mut self, row: u8, col: u8, now_ms: u64) -> bool {
        let dim = self.budgets.grid_dimension;
        if row >= dim || col >= dim {
            return false;
        }
        let center = self.layout.rect(row, col).center();
        self.handle_click(center, now_ms)
    }

    fn check_match(&mut self, now_ms: u64) {
        let (a, b) = (self.selection[0], self.selection[1]);
        if self.cards[a].value == self.cards[b].value {
            self.cards[a].matched = true;
            self.cards[b].matched = true;
            self.selection.clear();
            log::debug!("matched pair {} at cards {a} and {b}", self.cards[a].value);
        } else {
            self.flip_back_at_ms = Some(now_ms + FLIP_BACK_MS);
            log::debug!(
                "mismatch {} / {}, flipping back at {}ms",
                self.cards[a].value,
                self.cards[b].value,
                now_ms + FLIP_BACK_MS
            );
        }
    }

    /// Fire the flip-back if its deadline has passed. Returns `true` if it fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.flip_back_at_ms {
            Some(deadline) if now_ms >= deadline => {
                for index in self.selection.drain(..) {
                    self.cards[index].face_up = false;
                }
                self.flip_back_at_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Current outcome. Win beats Lose, which beats Timeout.
    pub fn evaluate(&self, now_ms: u64) -> Status {
        if self.cards.iter().all(|c| c.matched) {
            return Status::Win;
        }
        if self.moves_remaining == Some(0) {
            return Status::Lose;
        }
        if let Some(budget) = self.budgets.time_budget_ms() {
            if self.elapsed_ms(now_ms) > budget {
                return Status::Timeout;
            }
        }
        Status::Playing
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    /// Whole seconds left on the clock, or `None` when untimed.
    pub fn seconds_remaining(&self, now_ms: u64) -> Option<u32> {
        let budget = self.budgets.time_budget_ms()?;
        Some((budget.saturating_sub(self.elapsed_ms(now_ms)) / 1000) as u32)
    }

    pub fn snapshot_into(&self, now_ms: u64, out: &mut RoundSnapshot) {
        out.level = self.level;
        out.grid_dimension = self.budgets.grid_dimension;
        out.cards.clear();
        out.cards.extend(
            self.cards
                .iter()
                .map(|c| CardSnapshot::new(c, self.layout.rect(c.row, c.col))),
        );
        out.moves_remaining = self.moves_remaining;
        out.seconds_remaining = self.seconds_remaining(now_ms);
        out.status = self.evaluate(now_ms);
    }

    pub fn snapshot(&self, now_ms: u64) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(now_ms, &mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    #[cfg(test)]
    pub(crate) fn set_moves_remaining(&mut self, moves: Option<u32>) {
        self.moves_remaining = moves;
    }
}
