use serde::{Deserialize, Serialize};

use crate::deck::Card;
use crate::types::{Banner, CardFace, Level, Rect, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub row: u8,
    pub col: u8,
    pub rect: Rect,
    pub face: CardFace,
    /// Only present while the card is visible.
    pub value: Option<u8>,
}

impl CardSnapshot {
    pub fn new(card: &Card, rect: Rect) -> Self {
        let face = card.face();
        Self {
            row: card.row,
            col: card.col,
            rect,
            face,
            value: (face != CardFace::FaceDown).then_some(card.value),
        }
    }
}

/// Everything the view needs to draw one round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub level: Level,
    pub grid_dimension: u8,
    pub cards: Vec<CardSnapshot>,
    /// `None` when moves are unlimited.
    pub moves_remaining: Option<u32>,
    /// `None` when the round is untimed.
    pub seconds_remaining: Option<u32>,
    pub status: Status,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.level = Level::FIRST;
        self.grid_dimension = 0;
        self.cards.clear();
        self.moves_remaining = None;
        self.seconds_remaining = None;
        self.status = Status::Playing;
    }

    pub fn matched_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.face == CardFace::Matched)
            .count()
    }
}

/// A round plus the run-level overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub round: RoundSnapshot,
    pub banner: Option<Banner>,
    pub finished: bool,
}
