//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout is
//! used for drawing and for mapping mouse clicks back to cards.

use crate::core::{CardSnapshot, GameSnapshot};
use crate::fb::{BoxGlyphs, CellStyle, FrameBuffer, Rgb};
use crate::types::{CardColor, CardId, GameNotice, DECK_SIZE, GRID_COLUMNS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// UI state drawn on top of the game: the keyboard cursor and an open notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewOverlay {
    pub cursor: Option<CardId>,
    pub notice: Option<GameNotice>,
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const TABLE: Rgb = Rgb::new(24, 28, 36);

/// Where the board frame lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    /// Card width in terminal columns (border included).
    card_w: u16,
    /// Card height in terminal rows (border included).
    card_h: u16,
    /// Blank columns/rows between cards.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x4 reads roughly as a portrait card with typical glyph aspect ratios.
        Self {
            card_w: 8,
            card_h: 4,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16, gap: u16) -> Self {
        Self {
            card_w: card_w.max(3),
            card_h: card_h.max(3),
            gap,
        }
    }

    /// Board frame size (border included).
    pub fn frame_size(&self) -> (u16, u16) {
        let cols = GRID_COLUMNS as u16;
        let rows = GRID_ROWS as u16;
        let grid_w = cols * self.card_w + (cols - 1) * self.gap;
        let grid_h = rows * self.card_h + (rows - 1) * self.gap;
        (grid_w + 2, grid_h + 2)
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (w, h) = self.frame_size();
        Layout {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Top-left corner of a card's box.
    fn card_origin(&self, layout: Layout, id: CardId) -> (u16, u16) {
        let col = id as u16 % GRID_COLUMNS as u16;
        let row = id as u16 / GRID_COLUMNS as u16;
        (
            layout.x + 1 + col * (self.card_w + self.gap),
            layout.y + 1 + row * (self.card_h + self.gap),
        )
    }

    /// Card under a terminal position, if any. Gaps and the frame hit nothing.
    pub fn card_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<CardId> {
        let layout = self.layout(viewport);
        (0..DECK_SIZE as CardId).find(|&id| {
            let (cx, cy) = self.card_origin(layout, id);
            x >= cx && x < cx + self.card_w && y >= cy && y < cy + self.card_h
        })
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_overlay(snap, &ViewOverlay::default(), viewport, fb);
    }

    pub fn render_into_with_overlay(
        &self,
        snap: &GameSnapshot,
        overlay: &ViewOverlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);
        let table = CellStyle::fg(Rgb::new(80, 80, 90)).on(TABLE);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.w - 2,
            layout.h - 2,
            ' ',
            table,
        );
        fb.draw_box(
            layout.x,
            layout.y,
            layout.w,
            layout.h,
            BoxGlyphs::LIGHT,
            border,
        );
        fb.put_str(layout.x + 2, layout.y, " MEMORY ", border.bold());

        for card in snap.cards.iter() {
            let focused = overlay.cursor == Some(card.id);
            self.draw_card(fb, layout, card, focused);
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if let Some(notice) = overlay.notice {
            self.draw_notice(fb, layout, &notice);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_overlay(snap, &ViewOverlay::default(), viewport)
    }

    pub fn render_with_overlay(
        &self,
        snap: &GameSnapshot,
        overlay: &ViewOverlay,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_overlay(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_card(&self, fb: &mut FrameBuffer, layout: Layout, card: &CardSnapshot, focused: bool) {
        let (x, y) = self.card_origin(layout, card.id);

        let (glyphs, edge) = if focused {
            (
                BoxGlyphs::HEAVY,
                CellStyle::fg(Rgb::new(255, 255, 255)).on(TABLE).bold(),
            )
        } else if card.matched {
            (
                BoxGlyphs::LIGHT,
                CellStyle::fg(Rgb::new(110, 110, 120)).on(TABLE).dim(),
            )
        } else {
            (
                BoxGlyphs::LIGHT,
                CellStyle::fg(Rgb::new(170, 170, 180)).on(TABLE),
            )
        };

        let (ch, face) = if card.flipped {
            ('█', CellStyle::fg(card_rgb(card.color)).on(TABLE))
        } else {
            ('░', CellStyle::fg(Rgb::new(60, 60, 70)).on(BLACK))
        };

        fb.fill_rect(x + 1, y + 1, self.card_w - 2, self.card_h - 2, ch, face);
        fb.draw_box(x, y, self.card_w, self.card_h, glyphs, edge);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 14 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut y = layout.y;
        for (name, n) in [
            ("TURNS", snap.turns),
            ("SCORE", snap.score),
            ("CHANCES LEFT", snap.chances),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        if snap.mismatch_ms > 0 {
            fb.put_str(panel_x, y, "WAIT", label);
            let dots = snap.mismatch_ms.div_ceil(200).min(10) as u16;
            fb.fill_rect(panel_x + 5, y, dots, 1, '•', value);
        }
        y = y.saturating_add(2);

        for line in ["arrows move", "space flip", "n new game", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_notice(&self, fb: &mut FrameBuffer, layout: Layout, notice: &GameNotice) {
        let box_w = layout.w.saturating_sub(4).max(12);
        let text_w = box_w.saturating_sub(4) as usize;
        let message = notice.message();
        let lines = wrap_words(&message, text_w);

        // border, title, blank, message lines, blank, hint, border
        let box_h = lines.len() as u16 + 6;
        let x = layout.x + layout.w.saturating_sub(box_w) / 2;
        let y = layout.y + layout.h.saturating_sub(box_h) / 2;

        let panel = CellStyle::fg(Rgb::new(235, 235, 235)).on(BLACK);
        fb.fill_rect(x, y, box_w, box_h, ' ', panel);
        fb.draw_box(x, y, box_w, box_h, BoxGlyphs::HEAVY, panel.bold());
        fb.put_str_centered(x, y + 1, box_w, notice.title(), panel.bold());
        for (i, line) in lines.iter().enumerate() {
            fb.put_str(x + 2, y + 3 + i as u16, line, panel);
        }
        fb.put_str_centered(x, y + box_h - 2, box_w, "[enter] OK", panel.dim());
    }
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();

        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn card_rgb(color: CardColor) -> Rgb {
    match color {
        CardColor::Red => Rgb::new(220, 60, 60),
        CardColor::Blue => Rgb::new(70, 110, 230),
        CardColor::Green => Rgb::new(70, 190, 90),
        CardColor::Yellow => Rgb::new(240, 220, 70),
        CardColor::Purple => Rgb::new(160, 80, 200),
        CardColor::Orange => Rgb::new(255, 150, 40),
    }
}
