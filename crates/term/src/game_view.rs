//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Cell, Phase};

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

/// Player record shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileView {
    pub best_score: u32,
    pub games_played: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(10, 10, 12);
const HEAD_FG: Rgb = Rgb::new(220, 20, 60);
const BODY_FG: Rgb = Rgb::new(170, 0, 0);
const FOOD_FG: Rgb = Rgb::new(255, 255, 255);

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board for a snapshot, in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let (cols, rows) = grid_dims(snap);
        let w = cols.saturating_mul(self.cell_w);
        let h = rows.saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Grid columns and rows that land inside the viewport for a frame at
    /// `(start_x, start_y)`.
    fn visible_grid(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
    ) -> (u16, u16) {
        let (cols, rows) = grid_dims(snap);
        let inner_w = viewport.width.saturating_sub(start_x.saturating_add(1));
        let inner_h = viewport.height.saturating_sub(start_y.saturating_add(1));
        (
            cols.min(inner_w.div_ceil(self.cell_w)),
            rows.min(inner_h.div_ceil(self.cell_h)),
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_profile(snap, None, viewport, fb);
    }

    pub fn render_into_with_profile(
        &self,
        snap: &GameSnapshot,
        profile: Option<&ProfileView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = GlyphStyle::new(Rgb::new(220, 20, 60), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let dot = GlyphStyle::new(Rgb::new(45, 45, 50), BOARD_BG).dim();
        let (vis_cols, vis_rows) = self.visible_grid(snap, viewport, start_x, start_y);
        for row in 0..vis_rows {
            for col in 0..vis_cols {
                self.fill_cell_rect(fb, start_x, start_y, col, row, '·', dot);
            }
        }

        if let Some(food) = snap.food {
            let style = GlyphStyle::new(FOOD_FG, BOARD_BG).bold();
            self.draw_grid_cell(fb, snap, start_x, start_y, food, '◆', style);
        }

        // Body first so the head wins if the two ever overlap.
        let body = GlyphStyle::new(BODY_FG, BOARD_BG);
        for &cell in snap.snake.iter().skip(1) {
            self.draw_grid_cell(fb, snap, start_x, start_y, cell, '█', body);
        }
        if let Some(head) = snap.head() {
            let style = GlyphStyle::new(HEAD_FG, BOARD_BG).bold();
            self.draw_grid_cell(fb, snap, start_x, start_y, head, '█', style);
        }

        self.draw_side_panel(fb, snap, profile, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Idle => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ANY KEY"),
            Phase::Paused => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            Phase::Over => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_profile(
        &self,
        snap: &GameSnapshot,
        profile: Option<&ProfileView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_profile(snap, profile, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
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

    /// Draw a board-unit cell, scaled down to its grid position.
    #[allow(clippy::too_many_arguments)]
    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        ch: char,
        style: GlyphStyle,
    ) {
        if let Some((col, row)) = snap.grid_of(cell) {
            let col = u16::try_from(col).unwrap_or(u16::MAX);
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            self.fill_cell_rect(fb, start_x, start_y, col, row, ch, style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        // Off-screen cells saturate past the edge and are clipped by the framebuffer.
        let px = start_x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w));
        let py = start_y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        profile: Option<&ProfileView>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = GlyphStyle::default().bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.len() as u32, value);
        y = y.saturating_add(2);

        if let Some(p) = profile {
            fb.put_str(panel_x, y, "BEST", label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, p.best_score.max(snap.score), value);
            y = y.saturating_add(2);

            fb.put_str(panel_x, y, "GAMES", label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, p.games_played, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, phase_label(snap.phase), value);
        y = y.saturating_add(2);

        for line in ["arrows/wasd turn", "space  pause", "q      quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn grid_dims(snap: &GameSnapshot) -> (u16, u16) {
    let clamp = |n: i32| n.clamp(0, u16::MAX as i32) as u16;
    (clamp(snap.columns()), clamp(snap.rows()))
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "READY",
        Phase::Running => "PLAYING",
        Phase::Paused => "PAUSED",
        Phase::Over => "GAME OVER",
    }
}
