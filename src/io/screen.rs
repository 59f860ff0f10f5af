use std::ops;

use super::{
    fmt::{Cell, FormattedExt, Text},
    XY,
};

/// A text framebuffer.
///
/// Everything is rendered onto it, then it's drawn to the display all at once by an [`IoSystem`][super::IoSystem].
/// This strategy avoids flickering and partial renders, and lets a dialog be drawn over whatever was already there.
#[derive(Clone)]
pub struct Screen {
    cells: Vec<Cell>,
    size: XY,
}

impl Screen {
    /// Create a new `Screen` in the given size.
    pub fn new(size: XY) -> Self {
        let mut res = Self {
            cells: vec![],
            size: XY(0, 0),
        };
        res.resize(size);
        res
    }

    /// How big this Screen is, in characters.
    pub fn size(&self) -> XY {
        self.size
    }

    /// Returns an iterator over the rows in a screen.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + ExactSizeIterator + '_ {
        (0..self.size.y()).map(move |y| &self[y])
    }

    /// Resize the screen, clearing its contents at the same time. Does not reallocate unless the screen is growing.
    pub fn resize(&mut self, size: XY) {
        self.cells.truncate(0);
        self.cells.resize(size.x() * size.y(), Cell::BLANK);
        self.size = size;
    }

    /// Write some formatted text to the position on screen.
    ///
    /// This **does not** handle newlines or anything else, it just writes characters left to right. Anything past
    /// the right edge, or a row past the bottom, is cut off.
    pub fn write(&mut self, pos: XY, text: Vec<Text>) {
        let XY(mut x, y) = pos;
        if y >= self.size.y() {
            return;
        }
        for chunk in text {
            for char in chunk.text.chars() {
                if x >= self.size.x() {
                    return;
                }
                self[y][x] = Cell::of(char).fmt_of(&chunk);
                x += 1;
            }
        }
    }

    /// The characters in one row, formatting dropped. Handy for tests and logs.
    pub fn row_text(&self, row: usize) -> String {
        self[row].iter().map(|c| c.ch).collect()
    }

    /// The whole screen as plain text, one line per row, with trailing spaces trimmed.
    pub fn plain_text(&self) -> String {
        let mut res = String::new();
        for y in 0..self.size.y() {
            res.push_str(self.row_text(y).trim_end());
            res.push('\n');
        }
        res
    }
}

impl ops::Index<usize> for Screen {
    type Output = [Cell];
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.size.x();
        let end = start + self.size.x();
        &self.cells[start..end]
    }
}

impl ops::IndexMut<usize> for Screen {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.size.x();
        let end = start + self.size.x();
        &mut self.cells[start..end]
    }
}
