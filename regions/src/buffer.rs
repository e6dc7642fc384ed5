use unicode_width::UnicodeWidthChar;

use crate::color::Rgb;
use crate::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    /// Second half of a wide character; the terminal writer skips it.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            wide_continuation: false,
        }
    }
}

/// A grid of cells the painter draws into.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|idx| &mut self.cells[idx])
    }

    /// Reset every cell to a blank on `bg`.
    pub fn clear(&mut self, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell {
                bg,
                ..Cell::default()
            };
        }
    }

    /// Mark every cell as unknown so the next diff repaints everything.
    pub fn invalidate(&mut self) {
        for cell in &mut self.cells {
            cell.char = '\0';
        }
    }

    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    /// Write `text` starting at (x, y), keeping each cell's background.
    /// Returns the number of columns used; output is clipped at `max_x`.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bold: bool, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        let mut col = x;

        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            if col + width > max_x {
                break;
            }

            if let Some(cell) = self.get_mut(col, y) {
                cell.char = ch;
                cell.fg = fg;
                cell.bold = bold;
                cell.wide_continuation = false;
            }
            for extra in 1..width {
                if let Some(cell) = self.get_mut(col + extra, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
            col += width;
        }

        col - x
    }

    /// Cells that differ from `other`, in row-major order.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// Row `y` as a string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

/// Display width of a string in terminal columns.
pub fn str_width(text: &str) -> u16 {
    unicode_width::UnicodeWidthStr::width(text) as u16
}
