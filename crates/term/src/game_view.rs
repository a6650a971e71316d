//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, Tile, GRID_HEIGHT, GRID_WIDTH};

const FIELD_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_W: u16 = 14;
/// Largest tile edge in terminal cells; keeps `frame_size` within `u16`.
const MAX_TILE_CELLS: u16 = 16;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Used when the terminal cannot report its size.
    pub const FALLBACK: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Viewport from a terminal size query, falling back on failure.
    pub fn from_terminal_size(size: std::io::Result<(u16, u16)>) -> Self {
        size.map(|(w, h)| Self::new(w, h)).unwrap_or(Self::FALLBACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal renderer for the snake field.
///
/// Every grid tile becomes a `cell_w x cell_h` block of terminal cells placed
/// at `coord * (cell_w, cell_h)` inside a one-cell border.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_TILE_CELLS),
            cell_h: cell_h.clamp(1, MAX_TILE_CELLS),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size of the bordered field.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        if viewport.width < frame_w || viewport.height < frame_h {
            self.draw_too_small(fb, viewport, frame_w, frame_h);
            return;
        }

        let start_x = (viewport.width - frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => (viewport.height - frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let dot = CellStyle::new(Rgb::new(60, 60, 70), FIELD_BG).dim();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                self.fill_tile(fb, start_x, start_y, Coord::new(x, y), '·', dot);
            }
        }

        for (coord, tile) in snap.tiles() {
            self.fill_tile(fb, start_x, start_y, coord, '█', tile_style(tile));
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.holding {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " READY ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        coord: Coord,
        ch: char,
        style: CellStyle,
    ) {
        // Out-of-grid coordinates never reach the view, but don't draw over the border if they do.
        if !coord.in_bounds() {
            return;
        }
        let px = start_x + 1 + coord.x as u16 * self.cell_w;
        let py = start_y + 1 + coord.y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SNAKE", label);
        y += 2;

        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, snap.snake.len() as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "RUN", label);
        fb.put_u32(panel_x, y + 1, snap.episode_id.saturating_add(1), value);
        y += 3;

        fb.put_str(panel_x, y, "HEADING", label);
        fb.put_str(panel_x, y + 1, snap.direction.as_str(), value);
        y += 3;

        fb.put_str(panel_x, y, "arrows/wasd", hint);
        fb.put_str(panel_x, y + 1, "q quit", hint);
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
        let y = viewport.height / 2;
        let lines = [
            ("terminal too small".to_string(), CellStyle::default().bold()),
            (format!("need {}x{}", need_w, need_h), CellStyle::default()),
        ];
        for (i, (text, style)) in lines.iter().enumerate() {
            let x = viewport.width.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, (y + i as u16).saturating_sub(1), text, *style);
        }
    }
}

fn tile_style(tile: Tile) -> CellStyle {
    let fg = match tile {
        Tile::Head => Rgb::new(255, 0, 0),
        Tile::Body => Rgb::new(0, 0, 255),
        Tile::Fruit => Rgb::new(150, 150, 150),
    };
    let style = CellStyle::new(fg, FIELD_BG);
    if tile == Tile::Head {
        style.bold()
    } else {
        style
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let text_w = text.chars().count() as u16;
    let x = start_x + frame_w.saturating_sub(text_w) / 2;
    let y = start_y + frame_h / 2;
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, y, text, style);
}
