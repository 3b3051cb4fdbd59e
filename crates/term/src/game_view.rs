//! GameView: maps the core grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

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

// Palette carried over from the original canvas colors.
const COLOR_FLUX: Rgb = Rgb::new(0xcc, 0xff, 0xcc);
const COLOR_WALL: Rgb = Rgb::new(0x99, 0x99, 0x99);
const COLOR_PLAYER: Rgb = Rgb::new(0xff, 0x00, 0x00);
const COLOR_STONE: Rgb = Rgb::new(0x00, 0x00, 0xcc);
const COLOR_BOX: Rgb = Rgb::new(0x8b, 0x45, 0x13);
const COLOR_SET1: Rgb = Rgb::new(0xff, 0xcc, 0x00);
const COLOR_SET2: Rgb = Rgb::new(0x00, 0xcc, 0xff);

/// A lightweight terminal view of the grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
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

    /// Render the grid centered into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, grid: &Grid, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = grid.width() as u16 * self.cell_w;
        let grid_px_h = grid.height() as u16 * self.cell_h;
        let origin_x = viewport.width.saturating_sub(grid_px_w) / 2;
        let origin_y = viewport.height.saturating_sub(grid_px_h) / 2;

        for (x, y, tile) in grid.cells() {
            let Some(style) = tile_style(tile) else {
                continue;
            };
            fb.fill_rect(
                origin_x + x as u16 * self.cell_w,
                origin_y + y as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                ' ',
                style,
            );
        }

        let hint_y = origin_y + grid_px_h;
        fb.put_str(
            origin_x,
            hint_y.min(viewport.height.saturating_sub(1)),
            "arrows/wasd: move  q: quit",
            CellStyle::default(),
        );
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, viewport, &mut fb);
        fb
    }
}

/// Background style for a tile; `None` means the cell stays blank (air).
fn tile_style(tile: Tile) -> Option<CellStyle> {
    let bg = match tile {
        Tile::Air => return None,
        Tile::Flux => COLOR_FLUX,
        Tile::Unbreakable => COLOR_WALL,
        Tile::Player => COLOR_PLAYER,
        Tile::Stone(_) => COLOR_STONE,
        Tile::Box(_) => COLOR_BOX,
        Tile::Key1 | Tile::Lock1 => COLOR_SET1,
        Tile::Key2 | Tile::Lock2 => COLOR_SET2,
    };
    Some(CellStyle {
        bg,
        ..CellStyle::default()
    })
}
