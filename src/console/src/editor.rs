//! Interactive line input.
//!
//! [`LineEditor::read_line`] blocks, polling the keyboard, until Enter is
//! pressed. Each decoded key is applied to an [`EditSession`], which keeps the
//! screen and the line buffer in step and recalls earlier lines from the
//! [`History`].

use core::fmt;
use log::{debug, trace};
use mljos_common::{ColorCode, CursorPosition, KeyEvent, BUFFER_WIDTH};
use mljos_hal::{KeyboardPort, TextBuffer};

use crate::display::{Display, TAB_WIDTH};
use crate::history::History;
use crate::keyboard::ScancodeDecoder;

/// Size of a line buffer including its terminating zero.
pub const LINE_CAPACITY: usize = 128;

/// An accepted line of input.
///
/// The bytes past `len` are always zero, so the buffer doubles as a
/// NUL-terminated string.
#[derive(Clone)]
pub struct Line {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl Line {
    /// An empty line.
    pub const fn new() -> Self {
        Line {
            bytes: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// The typed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The typed bytes followed by a single zero.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// The line as text, cut at the first byte that is not valid UTF-8.
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&self.bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Number of bytes typed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing was typed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Callers keep `len` below `LINE_CAPACITY - 1`.
    fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    fn pop(&mut self) {
        if self.len > 0 {
            self.len -= 1;
            self.bytes[self.len] = 0;
        }
    }

    fn clear(&mut self) {
        self.bytes[..self.len].fill(0);
        self.len = 0;
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Line {}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Line").field(&self.as_str()).finish()
    }
}

/// Owns the state that outlives a single line read: modifier keys and the
/// history.
pub struct LineEditor {
    decoder: ScancodeDecoder,
    history: History,
    max_len: usize,
}

impl LineEditor {
    /// An editor accepting lines of up to `LINE_CAPACITY - 1` bytes.
    pub const fn new() -> Self {
        LineEditor {
            decoder: ScancodeDecoder::new(),
            history: History::new(),
            max_len: LINE_CAPACITY,
        }
    }

    /// An editor whose buffer holds `max_len` bytes including the
    /// terminator, clamped to `1..=LINE_CAPACITY`.
    pub fn with_max_len(max_len: usize) -> Self {
        LineEditor {
            max_len: max_len.clamp(1, LINE_CAPACITY),
            ..Self::new()
        }
    }

    /// Previously accepted lines.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The scancode decoder and its modifier state.
    pub fn decoder(&self) -> &ScancodeDecoder {
        &self.decoder
    }

    /// Starts a session at the display's current cursor position.
    pub fn session<'a, B: TextBuffer>(
        &'a mut self,
        display: &'a mut Display<B>,
    ) -> EditSession<'a, B> {
        EditSession::begin(display, &mut self.history, self.max_len)
    }

    /// Reads one line, blocking until Enter.
    ///
    /// The keyboard is polled continuously; nothing else runs meanwhile.
    pub fn read_line<B, K>(&mut self, display: &mut Display<B>, keyboard: &mut K) -> Line
    where
        B: TextBuffer,
        K: KeyboardPort,
    {
        let mut session = EditSession::begin(display, &mut self.history, self.max_len);
        loop {
            let event = self.decoder.decode(wait_for_scancode(keyboard));
            if let Some(line) = session.handle(event) {
                return line;
            }
        }
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn wait_for_scancode<K: KeyboardPort>(keyboard: &mut K) -> u8 {
    loop {
        if let Some(scancode) = keyboard.poll() {
            return scancode;
        }
        core::hint::spin_loop();
    }
}

/// State of one line read, from the end of the prompt until Enter.
pub struct EditSession<'a, B: TextBuffer> {
    display: &'a mut Display<B>,
    history: &'a mut History,
    max_len: usize,
    /// Where the prompt ended.
    origin: CursorPosition,
    line: Line,
    /// Distance from the newest history entry while browsing.
    browse: Option<usize>,
    /// Restored when the line is accepted.
    caller_color: ColorCode,
}

impl<'a, B: TextBuffer> EditSession<'a, B> {
    fn begin(display: &'a mut Display<B>, history: &'a mut History, max_len: usize) -> Self {
        let caller_color = display.color();
        let origin = display.cursor();
        display.set_color(ColorCode::DEFAULT);
        display.set_cursor(origin);
        EditSession {
            display,
            history,
            max_len,
            origin,
            line: Line::new(),
            browse: None,
            caller_color,
        }
    }

    /// Applies one key. Returns the finished line on Enter.
    pub fn handle(&mut self, event: KeyEvent) -> Option<Line> {
        trace!("edit: {:?} at len {}", event, self.line.len());
        match event {
            KeyEvent::Character(ch) => self.insert(ch),
            KeyEvent::Backspace => self.backspace(),
            KeyEvent::Tab => self.tab(),
            KeyEvent::Enter => return Some(self.accept()),
            KeyEvent::ArrowUp => self.recall_older(),
            KeyEvent::ArrowDown => self.recall_newer(),
            // Bounded by the screen edges only, not by the prompt.
            KeyEvent::ArrowLeft => {
                if !self.line.is_empty() {
                    self.display.retreat();
                }
            }
            KeyEvent::ArrowRight => {
                if self.line.len() < self.limit() {
                    self.display.advance();
                }
            }
            KeyEvent::Ignore => {}
        }
        None
    }

    /// Current contents of the line buffer.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Cursor position when the session started.
    pub fn origin(&self) -> CursorPosition {
        self.origin
    }

    /// How far back in history the buffer was recalled from, if browsing.
    pub fn browse_distance(&self) -> Option<usize> {
        self.browse
    }

    /// The display being edited on.
    pub fn display(&self) -> &Display<B> {
        &*self.display
    }

    fn limit(&self) -> usize {
        self.max_len - 1
    }

    fn insert(&mut self, ch: u8) {
        if self.line.len() < self.limit() {
            self.line.push(ch);
            self.display.draw(ch);
        }
    }

    fn backspace(&mut self) {
        if self.line.is_empty() {
            return;
        }
        self.display.retreat();
        let at = self.display.cursor();
        self.display.write_cell(b' ', at.row, at.col);
        self.line.pop();
    }

    /// Pads to the next multiple of `TAB_WIDTH` in the buffer, not on screen.
    fn tab(&mut self) {
        let pad = TAB_WIDTH - self.line.len() % TAB_WIDTH;
        for _ in 0..pad {
            if self.line.len() >= self.limit() {
                break;
            }
            self.line.push(b' ');
            self.display.draw(b' ');
        }
    }

    fn accept(&mut self) -> Line {
        self.display.put_char(b'\n');
        if !self.line.is_empty() {
            self.history.push(self.line.as_bytes());
        }
        self.display.set_color(self.caller_color);
        self.browse = None;
        debug!("edit: accepted {} bytes", self.line.len());
        core::mem::take(&mut self.line)
    }

    fn recall_older(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let oldest = self.history.len() - 1;
        let distance = match self.browse {
            None => 0,
            Some(distance) => (distance + 1).min(oldest),
        };
        self.browse = Some(distance);
        self.recall(distance);
    }

    fn recall_newer(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.browse {
            None | Some(0) => {
                self.browse = None;
                self.clear_input();
                self.line.clear();
            }
            Some(distance) => {
                self.browse = Some(distance - 1);
                self.recall(distance - 1);
            }
        }
    }

    fn recall(&mut self, distance: usize) {
        let Some(entry) = self.history.get(distance) else {
            return;
        };
        let mut recalled = Line::new();
        for &byte in entry.iter().take(self.limit()) {
            recalled.push(byte);
        }
        debug!("edit: recalled history distance {}", distance);

        self.clear_input();
        for &byte in recalled.as_bytes() {
            self.display.draw(byte);
        }
        self.line = recalled;
    }

    /// Blanks the origin row from the origin column to the right edge and
    /// puts the cursor back at the origin.
    fn clear_input(&mut self) {
        let origin = self.origin;
        for col in origin.col..BUFFER_WIDTH {
            self.display.write_cell(b' ', origin.row, col);
        }
        self.display.set_cursor(origin);
    }
}
