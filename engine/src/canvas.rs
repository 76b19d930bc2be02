//! Draw surface abstraction and the braille-backed canvas the game renders into.
//!
//! Coordinates are canvas points. A terminal cell covers 2x4 points, so a
//! 200x100 canvas is shown as 100 columns by 25 rows. Lit points become
//! braille dots; text replaces whole cells.

use planet_walker_shared::geom::Vec2;

/// Height of a text row in canvas points.
pub const ROW_HEIGHT: i32 = 4;
/// Width of a text column in canvas points.
pub const COLUMN_WIDTH: i32 = 2;

/// Pack an RGB triple into `0xRRGGBB`.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const WHITE: u32 = 0xffffff;
    pub const GREEN: u32 = 0x00cd00;
    pub const ROSY_BROWN: u32 = 0xaf8787;
    pub const TREE_NEAR: u32 = rgb(48, 150, 0);
    pub const TREE_FAR: u32 = rgb(32, 90, 0);
    pub const EXIT_NEAR: u32 = rgb(0, 0, 255);
    pub const EXIT_FAR: u32 = rgb(0, 0, 192);
}

/// Output sink for one frame. Points outside the surface are ignored.
pub trait DrawSurface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn draw_point(&mut self, x: i32, y: i32, color: u32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: u32);

    /// Circle outline (midpoint algorithm).
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        if radius < 0 {
            return;
        }
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            for (dx, dy) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.draw_point(cx.saturating_add(dx), cy.saturating_add(dy), color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Filled disc, drawn as horizontal spans clipped to the surface.
    /// Only rows on the surface are visited, whatever the radius.
    fn draw_circle_filled(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        if radius < 0 {
            return;
        }
        let (w, h) = (self.width() as i64, self.height() as i64);
        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
        let top = (-r).max(-cy);
        let bottom = r.min(h - 1 - cy);
        for dy in top..=bottom {
            let y = cy + dy;
            let half = ((r * r - dy * dy) as f64).sqrt() as i64;
            let x0 = (cx - half).max(0);
            let x1 = (cx + half).min(w - 1);
            for x in x0..=x1 {
                self.draw_point(x as i32, y as i32, color);
            }
        }
    }
}

/// Multi-line text placement: the last line sits on the row-quantized
/// baseline of `point` and earlier lines stack upward from it.
pub fn draw_chars(surface: &mut dyn DrawSurface, point: Vec2, color: u32, text: &str) {
    let line_count = text.matches('\n').count() as i32;
    let mut y = (point.y / ROW_HEIGHT * ROW_HEIGHT)
        .saturating_sub(line_count.saturating_mul(ROW_HEIGHT));
    for line in text.split('\n') {
        surface.draw_text(point.x, y, line, color);
        y = y.saturating_add(ROW_HEIGHT);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Braille dot bits, 0 means empty
    Dots(u8),
    Text(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: Glyph,
    pub fg: u32,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        glyph: Glyph::Dots(0),
        fg: Colors::WHITE,
    };

    pub fn symbol(&self) -> char {
        match self.glyph {
            Glyph::Dots(0) => ' ',
            Glyph::Dots(bits) => char::from_u32(0x2800 + bits as u32).unwrap_or(' '),
            Glyph::Text(c) => c,
        }
    }
}

/// Dot bit for a point inside its cell, indexed by [x % 2][y % 4].
const BRAILLE_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: i32,
    height: i32,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cols = (width as usize).div_ceil(COLUMN_WIDTH as usize);
        let rows = (height as usize).div_ceil(ROW_HEIGHT as usize);
        Self {
            width,
            height,
            cols,
            rows,
            cells: vec![Cell::EMPTY; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Is the point lit (as a dot) on this canvas?
    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        match self.cell_at_point(x, y).glyph {
            Glyph::Dots(bits) => bits & BRAILLE_BITS[(x % 2) as usize][(y % 4) as usize] != 0,
            Glyph::Text(_) => false,
        }
    }

    /// A row of cells as plain characters.
    pub fn row_text(&self, row: usize) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(col, row))
            .map(Cell::symbol)
            .collect()
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn cell_at_point(&self, x: i32, y: i32) -> &Cell {
        let idx = (y / ROW_HEIGHT) as usize * self.cols + (x / COLUMN_WIDTH) as usize;
        &self.cells[idx]
    }

    fn cell_at_point_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let idx = (y / ROW_HEIGHT) as usize * self.cols + (x / COLUMN_WIDTH) as usize;
        &mut self.cells[idx]
    }
}

impl DrawSurface for Canvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn draw_point(&mut self, x: i32, y: i32, color: u32) {
        if !self.contains(x, y) {
            return;
        }
        let bit = BRAILLE_BITS[(x % 2) as usize][(y % 4) as usize];
        let cell = self.cell_at_point_mut(x, y);
        let bits = match cell.glyph {
            Glyph::Dots(bits) => bits,
            Glyph::Text(_) => 0,
        };
        cell.glyph = Glyph::Dots(bits | bit);
        cell.fg = color;
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: u32) {
        let mut x = x;
        for c in text.chars() {
            if x >= self.width {
                break;
            }
            if self.contains(x, y) {
                let cell = self.cell_at_point_mut(x, y);
                cell.glyph = Glyph::Text(c);
                cell.fg = color;
            }
            x = x.saturating_add(COLUMN_WIDTH);
        }
    }
}
