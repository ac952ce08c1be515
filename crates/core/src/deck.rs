//! Deck module - cards and shuffled pair assignment

use serde::{Deserialize, Serialize};

use crate::rng::DeckRng;
use crate::types::CardFace;

/// One card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub row: u8,
    pub col: u8,
    /// Pair identifier shared with exactly one other card.
    pub value: u8,
    pub face_up: bool,
    /// Once set, never cleared for the rest of the round.
    pub matched: bool,
}

impl Card {
    pub fn new(row: u8, col: u8, value: u8) -> Self {
        Self {
            row,
            col,
            value,
            face_up: false,
            matched: false,
        }
    }

    pub fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched
        } else if self.face_up {
            CardFace::FaceUp
        } else {
            CardFace::FaceDown
        }
    }

    /// Whether a click may flip this card.
    pub fn is_selectable(&self) -> bool {
        !self.matched && !self.face_up
    }
}

/// Pair values `1..=pairs`, each twice, in a uniformly random order.
pub fn shuffled_values(pairs: usize, rng: &mut DeckRng) -> Vec<u8> {
    let mut values: Vec<u8> = (1..=pairs as u8).chain(1..=pairs as u8).collect();
    rng.shuffle(&mut values);
    values
}

/// Lay `values` out row-major on a `dimension x dimension` grid.
pub fn deal(dimension: u8, values: &[u8]) -> Vec<Card> {
    debug_assert_eq!(values.len(), dimension as usize * dimension as usize);
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let row = (i / dimension as usize) as u8;
            let col = (i % dimension as usize) as u8;
            Card::new(row, col, value)
        })
        .collect()
}

/// Build a fresh face-down deck for a grid.
pub fn build_deck(dimension: u8, rng: &mut DeckRng) -> Vec<Card> {
    let pairs = dimension as usize * dimension as usize / 2;
    let values = shuffled_values(pairs, rng);
    deal(dimension, &values)
}
