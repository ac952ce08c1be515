//! GameView: maps a [`RunSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Card rectangles come precomputed in the
//! snapshot, so the view never recomputes layout and always draws exactly
//! where clicks land.

use crate::core::{CardSnapshot, RunSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Banner, CardFace, Rect, Viewport, FOOTER_HEIGHT, MAX_LEVEL};

const BACKGROUND: Rgb = Rgb::new(28, 28, 36);
const CARD_BACK: Rgb = Rgb::new(79, 129, 189);
const CARD_FRONT: Rgb = Rgb::new(255, 255, 255);
const MATCHED: Rgb = Rgb::new(67, 160, 71);
const SELECTED: Rgb = Rgb::new(244, 67, 54);
const TEXT: Rgb = Rgb::new(33, 33, 33);
const TIMER: Rgb = Rgb::new(3, 169, 244);
const WARNING: Rgb = Rgb::new(255, 152, 0);
const LEVEL: Rgb = Rgb::new(156, 39, 176);
const LABEL: Rgb = Rgb::new(220, 220, 220);
const HINT: Rgb = Rgb::new(130, 130, 140);

/// Seconds left at which the countdown switches to the warning color.
const TIME_WARNING_SECS: u32 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &RunSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_cursor(snap, None, viewport, fb);
    }

    /// Same as [`GameView::render_into`], marking the keyboard cursor card.
    pub fn render_into_with_cursor(
        &self,
        snap: &RunSnapshot,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(LABEL, BACKGROUND).into_cell(' '));

        self.draw_hud(fb, snap, viewport);

        for card in &snap.round.cards {
            self.draw_card(fb, card);
        }

        if snap.banner.is_none() {
            if let Some(card) = cursor.and_then(|(row, col)| {
                snap.round
                    .cards
                    .iter()
                    .find(|c| c.row == row && c.col == col)
            }) {
                self.draw_cursor(fb, card.rect);
            }
        }

        self.draw_footer(fb, viewport);

        if let Some(banner) = snap.banner {
            self.draw_banner(fb, viewport, banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RunSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &RunSnapshot, viewport: Viewport) {
        let round = &snap.round;
        let label = CellStyle::new(LABEL, BACKGROUND).bold();

        let mut x = 1;
        x = fb.put_str(x, 0, "LEVEL ", label);
        x = fb.put_u32(x, 0, round.level.get() as u32, CellStyle::new(LEVEL, BACKGROUND).bold());
        x = fb.put_str(x, 0, "/", label);
        fb.put_u32(x, 0, MAX_LEVEL as u32, label);

        let value = CellStyle::new(LABEL, BACKGROUND);
        let mut x = 1;
        x = fb.put_str(x, 1, "MOVES ", label);
        match round.moves_remaining {
            Some(n) => {
                fb.put_u32(x, 1, n, value);
            }
            None => {
                fb.put_str(x, 1, "unlimited", value);
            }
        }

        let pairs = (round.cards.len() / 2) as u32;
        let matched = (round.matched_count() / 2) as u32;
        let mut x = 20;
        x = fb.put_str(x, 1, "PAIRS ", label);
        x = fb.put_u32(x, 1, matched, value);
        x = fb.put_str(x, 1, "/", value);
        fb.put_u32(x, 1, pairs, value);

        if let Some(secs) = round.seconds_remaining {
            let color = if secs <= TIME_WARNING_SECS { WARNING } else { TIMER };
            let style = CellStyle::new(color, BACKGROUND).bold();
            // "TIME 300s" is at most 10 columns wide.
            let x = viewport.width.saturating_sub(11);
            let x = fb.put_str(x, 0, "TIME ", label);
            let x = fb.put_u32(x, 0, secs, style);
            fb.put_str(x, 0, "s", style);
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, card: &CardSnapshot) {
        let (bg, fg, fill) = match card.face {
            CardFace::FaceDown => (CARD_BACK, Rgb::new(110, 155, 210), '░'),
            CardFace::FaceUp => (CARD_FRONT, SELECTED, ' '),
            CardFace::Matched => (MATCHED, CARD_FRONT, ' '),
        };
        let style = CellStyle::new(fg, bg);
        fb.fill(card.rect, fill, style);

        if let Some(value) = card.value {
            let text = CellStyle::new(
                if card.face == CardFace::Matched { CARD_FRONT } else { TEXT },
                bg,
            )
            .bold();
            let digits = if value >= 10 { 2 } else { 1 };
            let center = card.rect.center();
            let x = card.rect.x + card.rect.w.saturating_sub(digits) / 2;
            fb.put_u32(x, center.y, value as u32, text);
        }

        // Selected cards get a red frame once they are tall enough for one.
        if card.face == CardFace::FaceUp && card.rect.h >= 3 {
            self.draw_border(fb, card.rect, style);
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, rect: Rect) {
        let style = CellStyle::new(Rgb::new(255, 235, 59), BACKGROUND).bold();
        let mid = rect.center().y;
        if rect.x > 0 {
            fb.put_char(rect.x - 1, mid, '▶', style);
        }
        fb.put_char(rect.x.saturating_add(rect.w), mid, '◀', style);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        if viewport.height < FOOTER_HEIGHT {
            return;
        }
        let y = viewport.height - FOOTER_HEIGHT;
        fb.put_str(
            1,
            y,
            "click or arrows+enter to flip  q quit",
            CellStyle::new(HINT, BACKGROUND),
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, rect: Rect, style: CellStyle) {
        let Rect { x, y, w, h } = rect;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, viewport: Viewport, banner: Banner) {
        let color = match banner {
            Banner::Cleared => MATCHED,
            Banner::OutOfTime | Banner::OutOfMoves => WARNING,
            Banner::AllLevelsComplete => LEVEL,
        };
        let text = banner.text();
        let text_w = text.chars().count() as u16;
        let w = (text_w + 4).min(viewport.width);
        let h = 5u16.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let frame = Rect::new(x, y, w, h);
        let body = CellStyle::new(CARD_FRONT, BACKGROUND);
        fb.fill(frame, ' ', body);
        self.draw_border(fb, frame, CellStyle::new(color, BACKGROUND));

        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, y + h / 2, text, CellStyle::new(color, BACKGROUND).bold());
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Run;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).unwrap_or_default().ch)
            .collect()
    }

    #[test]
    fn hud_shows_level_and_unlimited_moves() {
        let run = Run::new(1, Viewport::default(), 0);
        let fb = GameView::new().render(&run.snapshot(0), Viewport::default());
        assert!(row_text(&fb, 0).contains("LEVEL 1/15"));
        assert!(row_text(&fb, 1).contains("MOVES unlimited"));
        assert!(!row_text(&fb, 0).contains("TIME"));
    }

    #[test]
    fn face_down_cards_hide_values() {
        let run = Run::new(1, Viewport::default(), 0);
        let snap = run.snapshot(0);
        let fb = GameView::new().render(&snap, Viewport::default());
        for card in &snap.round.cards {
            let c = fb.get(card.rect.x, card.rect.y).unwrap();
            assert_eq!(c.ch, '░');
            assert_eq!(c.style.bg, CARD_BACK);
        }
    }

    #[test]
    fn cursor_marks_are_drawn_beside_the_card() {
        let run = Run::new(1, Viewport::default(), 0);
        let snap = run.snapshot(0);
        let mut fb = FrameBuffer::new(1, 1);
        GameView::new().render_into_with_cursor(&snap, Some((0, 0)), Viewport::default(), &mut fb);
        let rect = snap.round.cards[0].rect;
        let mid = rect.center().y;
        assert_eq!(fb.get(rect.x - 1, mid).map(|c| c.ch), Some('▶'));
        assert_eq!(fb.get(rect.x + rect.w, mid).map(|c| c.ch), Some('◀'));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let run = Run::new(1, Viewport::new(3, 2), 0);
        let fb = GameView::new().render(&run.snapshot(0), Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 2);
    }
}
