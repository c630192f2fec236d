//! Text-mode screen geometry, colors and cells.

/// Number of rows in the text grid.
pub const BUFFER_HEIGHT: usize = 25;

/// Number of columns in the text grid.
pub const BUFFER_WIDTH: usize = 80;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

/// Attribute byte of a cell: background in the high nibble, foreground in
/// the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Regular console output.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::White, Color::Black);
    /// The shell prompt.
    pub const PROMPT: ColorCode = ColorCode::new(Color::LightGreen, Color::Black);
    /// Error messages.
    pub const ERROR: ColorCode = ColorCode::new(Color::LightRed, Color::Black);
    /// Warnings before terminal actions such as reboot.
    pub const ALERT: ColorCode = ColorCode::new(Color::Yellow, Color::Black);

    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// The raw attribute byte.
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        ColorCode::DEFAULT
    }
}

/// A single character cell: the glyph byte followed by its attribute, in the
/// same order the framebuffer stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct ScreenChar {
    /// Code page 437 glyph.
    pub ascii_character: u8,
    /// Attribute byte.
    pub color_code: ColorCode,
}

impl ScreenChar {
    /// A space in the default color.
    pub const BLANK: ScreenChar = ScreenChar::new(b' ', ColorCode::DEFAULT);

    /// Creates a cell.
    pub const fn new(ascii_character: u8, color_code: ColorCode) -> ScreenChar {
        ScreenChar {
            ascii_character,
            color_code,
        }
    }
}

/// A (row, column) position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorPosition {
    /// Row, `0..BUFFER_HEIGHT` at rest.
    pub row: usize,
    /// Column, `0..BUFFER_WIDTH` at rest.
    pub col: usize,
}

impl CursorPosition {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> CursorPosition {
        CursorPosition { row, col }
    }

    /// Linear cell index, or `None` when the position is off the grid.
    pub const fn index(self) -> Option<usize> {
        if self.row < BUFFER_HEIGHT && self.col < BUFFER_WIDTH {
            Some(self.row * BUFFER_WIDTH + self.col)
        } else {
            None
        }
    }
}
