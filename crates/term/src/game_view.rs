//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, GRID_HEIGHT, GRID_WIDTH};

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

/// A lightweight terminal view of the playfield.
///
/// The well is drawn inside a wall frame that is open at the top, the way
/// the playfield outline of the original game looked: side walls from one
/// row above the grid down to the floor, plus a floor row.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized and
    /// cleared here.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let frame_w = (u16::from(GRID_WIDTH) + 2) * self.cell_w;
        let frame_h = (u16::from(GRID_HEIGHT) + 2) * self.cell_h;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_walls(fb, start_x, start_y);
        self.draw_well(fb, start_x, start_y);

        for block in &snap.blocks {
            self.draw_cell(fb, start_x, start_y, block.x, block.y, block.color);
        }
        for cell in &snap.active {
            self.draw_cell(fb, start_x, start_y, cell.x, cell.y, cell.color);
        }

        self.draw_hud(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Map a grid coordinate (walls included, so -1..=W and -1..=H are
    /// valid) to its framebuffer rectangle and fill it.
    fn fill_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        gx: i8,
        gy: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + (gx + 1) as u16 * self.cell_w;
        let py = start_y + (gy + 1) as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_walls(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let wall = CellStyle::new(Rgb::new(47, 79, 79), Rgb::new(0, 0, 0));
        let (w, h) = (GRID_WIDTH as i8, GRID_HEIGHT as i8);

        // Side walls start one row above the grid; the top stays open.
        for gy in -1..h {
            self.fill_grid_cell(fb, start_x, start_y, -1, gy, '█', wall);
            self.fill_grid_cell(fb, start_x, start_y, w, gy, '█', wall);
        }
        for gx in -1..=w {
            self.fill_grid_cell(fb, start_x, start_y, gx, h, '█', wall);
        }
    }

    fn draw_well(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let well = CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(15, 15, 20));
        for gy in 0..GRID_HEIGHT as i8 {
            for gx in 0..GRID_WIDTH as i8 {
                self.fill_grid_cell(fb, start_x, start_y, gx, gy, ' ', well);
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        gx: i8,
        gy: i8,
        color: BlockColor,
    ) {
        if gx < 0 || gx >= GRID_WIDTH as i8 || gy < 0 || gy >= GRID_HEIGHT as i8 {
            return;
        }
        let style = CellStyle::new(color_rgb(color), Rgb::new(15, 15, 20)).bold();
        self.fill_grid_cell(fb, start_x, start_y, gx, gy, '█', style);
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(8) >= viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(255, 255, 0), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(255, 255, 0), Rgb::new(0, 0, 0));

        let mut y = start_y.saturating_add(1);
        for (name, amount) in [
            ("LEVEL", snap.level),
            ("LINES", snap.lines_cleared),
            ("SCORE", snap.score),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &amount.to_string(), value);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay(
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
        let style = CellStyle::new(Rgb::new(0, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn color_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Red => Rgb::new(255, 0, 0),
        BlockColor::Magenta => Rgb::new(255, 0, 255),
        BlockColor::Yellow => Rgb::new(255, 255, 0),
        BlockColor::Cyan => Rgb::new(0, 255, 255),
        BlockColor::Blue => Rgb::new(0, 0, 255),
        BlockColor::Silver => Rgb::new(192, 192, 192),
        BlockColor::Green => Rgb::new(0, 128, 0),
    }
}
