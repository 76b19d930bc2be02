//! Terminal output: raw mode and alternate screen setup, plus cell-diff
//! drawing of engine canvases.

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use planet_walker_engine::canvas::{Canvas, Cell};
use std::io::{self, Write};

/// Puts the terminal in game mode; restores it when dropped, including on
/// early returns and panics.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(
            out,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

pub fn color_from_hex(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// Cells that differ from the previous frame, as (column, row, cell).
pub fn changed_cells(prev: &[Cell], cur: &[Cell], cols: usize) -> Vec<(u16, u16, Cell)> {
    cur.iter()
        .enumerate()
        .filter(|&(i, cell)| prev.get(i) != Some(cell))
        .map(|(i, cell)| ((i % cols) as u16, (i / cols) as u16, *cell))
        .collect()
}

/// Last frame shown on the terminal.
pub struct Screen {
    prev: Vec<Cell>,
    cols: usize,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            prev: Vec::new(),
            cols: 0,
        }
    }

    /// Forget what is on screen so the next frame is drawn in full.
    pub fn invalidate(&mut self) {
        self.prev.clear();
    }

    pub fn draw(&mut self, out: &mut impl Write, canvas: &Canvas) -> io::Result<()> {
        let cur = canvas.cells();
        queue!(out, BeginSynchronizedUpdate)?;

        if self.prev.len() != cur.len() || self.cols != canvas.cols() {
            queue!(out, ResetColor, terminal::Clear(ClearType::All))?;
            self.prev = vec![Cell::EMPTY; cur.len()];
            self.cols = canvas.cols();
        }

        let mut cur_fg = None;
        for (x, y, cell) in changed_cells(&self.prev, cur, self.cols) {
            queue!(out, cursor::MoveTo(x, y))?;
            if cur_fg != Some(cell.fg) {
                cur_fg = Some(cell.fg);
                queue!(out, SetForegroundColor(color_from_hex(cell.fg)))?;
            }
            queue!(out, Print(cell.symbol()))?;
        }
        self.prev.copy_from_slice(cur);

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
