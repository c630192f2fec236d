//! A text buffer that lives in ordinary memory.

use mljos_common::{ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};
use mljos_hal::TextBuffer;

const CELLS: usize = BUFFER_WIDTH * BUFFER_HEIGHT;

/// RAM-backed grid with the same layout as the VGA text buffer.
#[derive(Clone)]
pub struct MemoryBuffer {
    cells: [ScreenChar; CELLS],
    cursor: u16,
}

impl MemoryBuffer {
    /// A grid of blank cells with the cursor at the origin.
    pub const fn new() -> Self {
        MemoryBuffer {
            cells: [ScreenChar::BLANK; CELLS],
            cursor: 0,
        }
    }

    /// The cells of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= BUFFER_HEIGHT`.
    pub fn row(&self, row: usize) -> &[ScreenChar] {
        &self.cells[row * BUFFER_WIDTH..(row + 1) * BUFFER_WIDTH]
    }

    /// The glyph bytes of one row.
    pub fn row_bytes(&self, row: usize) -> [u8; BUFFER_WIDTH] {
        let mut bytes = [0; BUFFER_WIDTH];
        for (dst, cell) in bytes.iter_mut().zip(self.row(row)) {
            *dst = cell.ascii_character;
        }
        bytes
    }

    /// Last index handed to [`TextBuffer::move_cursor`].
    pub fn hardware_cursor(&self) -> u16 {
        self.cursor
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for MemoryBuffer {
    fn write_cell(&mut self, index: usize, cell: ScreenChar) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    fn read_cell(&self, index: usize) -> ScreenChar {
        self.cells.get(index).copied().unwrap_or(ScreenChar::BLANK)
    }

    fn move_cursor(&mut self, index: u16) {
        self.cursor = index;
    }
}
