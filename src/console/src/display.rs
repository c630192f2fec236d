//! Character grid with a cursor.
//!
//! [`Display`] owns the cursor and the active color and is the only writer of
//! the underlying [`TextBuffer`]. Every cursor change is mirrored to the
//! hardware cursor.

use core::fmt;
use log::debug;
use mljos_common::{ColorCode, CursorPosition, ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};
use mljos_hal::TextBuffer;

/// Tab stops are every `TAB_WIDTH` columns.
pub const TAB_WIDTH: usize = 4;

/// Console output surface over a text buffer.
pub struct Display<B: TextBuffer> {
    buffer: B,
    /// Row may equal `BUFFER_HEIGHT` only between an advance and the scroll
    /// check that follows it.
    cursor: CursorPosition,
    color: ColorCode,
}

impl<B: TextBuffer> Display<B> {
    /// Wraps a buffer. The cursor starts at the origin and the contents are
    /// left alone; call [`Display::clear`] to blank them.
    pub fn new(buffer: B) -> Self {
        Display {
            buffer,
            cursor: CursorPosition::default(),
            color: ColorCode::DEFAULT,
        }
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Moves the cursor, clamping each coordinate onto the grid.
    pub fn set_cursor(&mut self, position: CursorPosition) {
        self.cursor = CursorPosition::new(
            position.row.min(BUFFER_HEIGHT - 1),
            position.col.min(BUFFER_WIDTH - 1),
        );
        self.update_cursor();
    }

    /// Color used for subsequent writes.
    pub fn color(&self) -> ColorCode {
        self.color
    }

    /// Sets the color for subsequent writes. Existing cells keep theirs.
    pub fn set_color(&mut self, color: ColorCode) {
        self.color = color;
    }

    /// Runs `f` with `color` active, then restores the previous color.
    pub fn with_color<R>(&mut self, color: ColorCode, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = self.color;
        self.color = color;
        let result = f(self);
        self.color = previous;
        result
    }

    /// Writes `ch` in the current color at (`row`, `col`). Off-grid writes
    /// are dropped.
    pub fn write_cell(&mut self, ch: u8, row: usize, col: usize) {
        if let Some(index) = CursorPosition::new(row, col).index() {
            self.buffer
                .write_cell(index, ScreenChar::new(ch, self.color));
        }
    }

    /// Reads the cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Option<ScreenChar> {
        CursorPosition::new(row, col)
            .index()
            .map(|index| self.buffer.read_cell(index))
    }

    /// Writes one byte at the cursor.
    ///
    /// `\n` starts the next row, `\r` returns to column 0 and `\t` emits
    /// spaces up to the next tab stop. Any other byte is drawn and the cursor
    /// advances, wrapping at the right edge.
    pub fn put_char(&mut self, ch: u8) {
        match ch {
            b'\n' => {
                self.cursor.col = 0;
                self.cursor.row += 1;
                self.scroll_if_needed();
                self.update_cursor();
            }
            b'\r' => {
                self.cursor.col = 0;
                self.update_cursor();
            }
            b'\t' => {
                let pad = TAB_WIDTH - self.cursor.col % TAB_WIDTH;
                for _ in 0..pad {
                    self.put_char(b' ');
                }
            }
            ch => self.draw(ch),
        }
    }

    /// Writes every byte of `s` with [`Display::put_char`].
    pub fn puts(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Scrolls one row up once the cursor has moved past the last row.
    ///
    /// The cursor always lands on column 0 of the last row, even when the
    /// scroll was caused by a wrap in the middle of a line.
    pub fn scroll_if_needed(&mut self) {
        if self.cursor.row < BUFFER_HEIGHT {
            return;
        }
        for index in BUFFER_WIDTH..BUFFER_WIDTH * BUFFER_HEIGHT {
            let cell = self.buffer.read_cell(index);
            self.buffer.write_cell(index - BUFFER_WIDTH, cell);
        }
        self.clear_row(BUFFER_HEIGHT - 1);
        self.cursor = CursorPosition::new(BUFFER_HEIGHT - 1, 0);
        debug!("display scrolled");
        self.update_cursor();
    }

    /// Blanks the whole grid, homes the cursor and resets the color.
    pub fn clear(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.cursor = CursorPosition::default();
        self.color = ColorCode::DEFAULT;
        self.update_cursor();
    }

    /// Draws `ch` at the cursor and advances.
    pub(crate) fn draw(&mut self, ch: u8) {
        self.write_cell(ch, self.cursor.row, self.cursor.col);
        self.advance();
    }

    /// Moves one column right, wrapping onto the next row.
    pub(crate) fn advance(&mut self) {
        self.cursor.col += 1;
        if self.cursor.col >= BUFFER_WIDTH {
            self.cursor.col = 0;
            self.cursor.row += 1;
            self.scroll_if_needed();
        }
        self.update_cursor();
    }

    /// Moves one column left, wrapping onto the end of the previous row.
    /// Stays put at the origin.
    pub(crate) fn retreat(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = BUFFER_WIDTH - 1;
        }
        self.update_cursor();
    }

    /// Rows are cleared in the default color regardless of the active one.
    fn clear_row(&mut self, row: usize) {
        debug_assert!(row < BUFFER_HEIGHT, "row index out of bounds");

        for col in 0..BUFFER_WIDTH {
            self.buffer
                .write_cell(row * BUFFER_WIDTH + col, ScreenChar::BLANK);
        }
    }

    fn update_cursor(&mut self) {
        if let Some(index) = self.cursor.index() {
            // 2000 cells fit in the 16-bit CRTC cursor location
            self.buffer.move_cursor(index as u16);
        }
    }
}

impl<B: TextBuffer> fmt::Write for Display<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // Printable ASCII or layout control
                0x20..=0x7e | b'\n' | b'\r' | b'\t' => self.put_char(byte),
                // Non-ASCII: show placeholder
                _ => self.put_char(0xfe),
            }
        }
        Ok(())
    }
}
