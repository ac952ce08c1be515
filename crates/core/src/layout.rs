//! Board layout - card rectangles in screen cells
//!
//! Card size is fitted to the viewport between `CARD_MIN_*` and `CARD_MAX_*`
//! and the board is centered below the HUD. The same rectangles drive both
//! click hit-testing and drawing, so what the player sees is what they hit.

use crate::types::{
    Rect, Viewport, CARD_GAP_X, CARD_GAP_Y, CARD_MAX_H, CARD_MAX_W, CARD_MIN_H, CARD_MIN_W,
    FOOTER_HEIGHT, HUD_HEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardLayout {
    dimension: u8,
    origin_x: u16,
    origin_y: u16,
    card_w: u16,
    card_h: u16,
}

impl BoardLayout {
    /// Fit a `dimension x dimension` board into `viewport`.
    ///
    /// On viewports too small for the minimum card size the board keeps the
    /// minimum and is clipped by the renderer.
    pub fn fit(dimension: u8, viewport: Viewport) -> Self {
        let n = dimension.max(1) as u16;

        let avail_w = viewport.width;
        let avail_h = viewport
            .height
            .saturating_sub(HUD_HEIGHT)
            .saturating_sub(FOOTER_HEIGHT);

        let card_w = (avail_w.saturating_sub(CARD_GAP_X * (n - 1)) / n).clamp(CARD_MIN_W, CARD_MAX_W);
        let card_h = (avail_h.saturating_sub(CARD_GAP_Y * (n - 1)) / n).clamp(CARD_MIN_H, CARD_MAX_H);

        let board_w = n * card_w + (n - 1) * CARD_GAP_X;
        let board_h = n * card_h + (n - 1) * CARD_GAP_Y;

        Self {
            dimension,
            origin_x: avail_w.saturating_sub(board_w) / 2,
            origin_y: HUD_HEIGHT + avail_h.saturating_sub(board_h) / 2,
            card_w,
            card_h,
        }
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    pub fn card_size(&self) -> (u16, u16) {
        (self.card_w, self.card_h)
    }

    /// Rectangle of the card at `(row, col)`.
    pub fn rect(&self, row: u8, col: u8) -> Rect {
        let x = self.origin_x + col as u16 * (self.card_w + CARD_GAP_X);
        let y = self.origin_y + row as u16 * (self.card_h + CARD_GAP_Y);
        Rect::new(x, y, self.card_w, self.card_h)
    }

    /// Outer bounds of the whole board.
    pub fn bounds(&self) -> Rect {
        let n = self.dimension.max(1) as u16;
        Rect::new(
            self.origin_x,
            self.origin_y,
            n * self.card_w + (n - 1) * CARD_GAP_X,
            n * self.card_h + (n - 1) * CARD_GAP_Y,
        )
    }
}
