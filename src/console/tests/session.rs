//! Whole line reads driven by raw scancodes through a scripted keyboard.

use std::collections::VecDeque;

use mljos_common::{ColorCode, CursorPosition, BUFFER_HEIGHT, BUFFER_WIDTH};
use mljos_console::keyboard::scancode;
use mljos_console::{Display, LineEditor, MemoryBuffer};
use mljos_hal::KeyboardPort;

/// Replays scancodes, reporting "no data" between each one like a real
/// controller would.
struct ScriptedKeyboard {
    pending: VecDeque<u8>,
    ready: bool,
}

impl ScriptedKeyboard {
    fn new(scancodes: &[u8]) -> Self {
        ScriptedKeyboard {
            pending: scancodes.iter().copied().collect(),
            ready: false,
        }
    }

    fn is_drained(&self) -> bool {
        self.pending.is_empty()
    }
}

impl KeyboardPort for ScriptedKeyboard {
    fn status(&mut self) -> u8 {
        assert!(!self.pending.is_empty(), "keyboard script exhausted before Enter");
        // Alternate busy/ready to exercise the polling loop.
        self.ready = !self.ready;
        u8::from(self.ready)
    }

    fn read_scancode(&mut self) -> u8 {
        self.pending.pop_front().expect("read without data available")
    }
}

const ENTER: u8 = 0x1C;
const BACKSPACE: u8 = 0x0E;

/// Make and break codes for a lowercase word or space.
fn keys(text: &str) -> Vec<u8> {
    text.bytes()
        .flat_map(|b| {
            let make = match b {
                b'a' => 0x1E,
                b'c' => 0x2E,
                b'd' => 0x20,
                b'e' => 0x12,
                b'h' => 0x23,
                b'i' => 0x17,
                b'l' => 0x26,
                b'm' => 0x32,
                b'o' => 0x18,
                b's' => 0x1F,
                b't' => 0x14,
                b'x' => 0x2D,
                b' ' => 0x39,
                other => panic!("no scancode for {:?}", other as char),
            };
            [make, make | scancode::RELEASE]
        })
        .collect()
}

fn booted_display() -> Display<MemoryBuffer> {
    let mut display = Display::new(MemoryBuffer::new());
    display.clear();
    display
}

fn prompt(display: &mut Display<MemoryBuffer>) {
    display.with_color(ColorCode::PROMPT, |d| d.puts("System : "));
}

fn row_text(display: &Display<MemoryBuffer>, row: usize) -> String {
    String::from_utf8_lossy(&display.buffer().row_bytes(row))
        .trim_end()
        .to_string()
}

#[test]
fn typed_command_is_returned_and_remembered() {
    let mut display = booted_display();
    let mut editor = LineEditor::new();

    prompt(&mut display);
    let mut script = keys("date");
    script.push(ENTER);
    let mut keyboard = ScriptedKeyboard::new(&script);
    let line = editor.read_line(&mut display, &mut keyboard);

    assert_eq!(line.as_str(), "date");
    assert!(keyboard.is_drained());
    assert_eq!(editor.history().len(), 1);
    assert_eq!(editor.history().get(0), Some(&b"date"[..]));
    assert_eq!(row_text(&display, 0), "System : date");
    assert_eq!(display.cursor(), CursorPosition::new(1, 0));

    // Next session: arrow up pre-fills the previous command.
    prompt(&mut display);
    let mut keyboard = ScriptedKeyboard::new(&[scancode::ARROW_UP, ENTER]);
    let line = editor.read_line(&mut display, &mut keyboard);
    assert_eq!(line.as_str(), "date");
    assert_eq!(row_text(&display, 1), "System : date");
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn shifted_and_corrected_input() {
    let mut display = booted_display();
    let mut editor = LineEditor::new();

    let mut script = vec![scancode::LEFT_SHIFT];
    script.extend(keys("e"));
    script.push(scancode::LEFT_SHIFT_RELEASE);
    script.extend(keys("chox"));
    script.push(BACKSPACE);
    script.extend(keys(" hi"));
    script.push(ENTER);

    let line = editor.read_line(&mut display, &mut ScriptedKeyboard::new(&script));
    assert_eq!(line.as_str(), "Echo hi");
    assert_eq!(row_text(&display, 0), "Echo hi");
}

#[test]
fn caps_lock_survives_across_lines() {
    let mut display = booted_display();
    let mut editor = LineEditor::new();

    let mut script = vec![scancode::CAPS_LOCK, scancode::CAPS_LOCK | scancode::RELEASE];
    script.extend(keys("ls"));
    script.push(ENTER);
    let first = editor.read_line(&mut display, &mut ScriptedKeyboard::new(&script));
    assert_eq!(first.as_str(), "LS");

    let mut script = keys("cd");
    script.push(ENTER);
    let second = editor.read_line(&mut display, &mut ScriptedKeyboard::new(&script));
    assert_eq!(second.as_str(), "CD");
}

#[test]
fn eighty_characters_wrap_without_scrolling() {
    let mut display = booted_display();
    let mut editor = LineEditor::new();

    let mut script = keys(&"x".repeat(BUFFER_WIDTH));
    script.push(ENTER);
    let line = editor.read_line(&mut display, &mut ScriptedKeyboard::new(&script));

    assert_eq!(line.len(), BUFFER_WIDTH);
    assert_eq!(row_text(&display, 0), "x".repeat(BUFFER_WIDTH));
    // The wrap put the cursor on row 1, Enter moved it to row 2.
    assert_eq!(display.cursor(), CursorPosition::new(2, 0));
}

#[test]
fn long_session_scrolls_prompt_lines_off_the_top() {
    let mut display = booted_display();
    let mut editor = LineEditor::new();

    for _ in 0..BUFFER_HEIGHT + 3 {
        prompt(&mut display);
        let mut script = keys("time");
        script.push(ENTER);
        editor.read_line(&mut display, &mut ScriptedKeyboard::new(&script));
    }

    assert_eq!(display.cursor(), CursorPosition::new(BUFFER_HEIGHT - 1, 0));
    assert_eq!(row_text(&display, BUFFER_HEIGHT - 1), "");
    assert_eq!(row_text(&display, BUFFER_HEIGHT - 2), "System : time");
    assert_eq!(editor.history().total_pushed(), BUFFER_HEIGHT + 3);
    assert_eq!(editor.history().len(), mljos_console::HISTORY_SIZE);
}
