//! The interactive loop: prompt, read a line, run it.

use super::commands::Command;
use log::info;
use mljos_common::ColorCode;
use mljos_console::{Display, Line, LineEditor};
use mljos_hal::{KeyboardPort, PowerControl, RealTimeClock, TextBuffer};

/// Text shown before every input line.
pub const PROMPT: &str = "System : ";

/// Command-line shell owning the input devices and the line editor.
pub struct Shell<K, C, P> {
    editor: LineEditor,
    keyboard: K,
    clock: C,
    power: P,
}

impl<K, C, P> Shell<K, C, P>
where
    K: KeyboardPort,
    C: RealTimeClock,
    P: PowerControl,
{
    /// Create a new shell with an empty history.
    pub fn new(keyboard: K, clock: C, power: P) -> Self {
        Self {
            editor: LineEditor::new(),
            keyboard,
            clock,
            power,
        }
    }

    /// Display the shell prompt.
    pub fn prompt<B: TextBuffer>(&self, display: &mut Display<B>) {
        display.with_color(ColorCode::PROMPT, |d| d.puts(PROMPT));
    }

    /// Reads and runs lines forever.
    pub fn run<B: TextBuffer>(&mut self, display: &mut Display<B>) -> ! {
        info!("shell: ready");
        loop {
            self.prompt(display);
            let line = self.editor.read_line(display, &mut self.keyboard);
            self.execute(display, &line);
        }
    }

    /// Runs one finished line. Output uses the default color; the caller's
    /// color is restored afterwards.
    pub fn execute<B: TextBuffer>(&mut self, display: &mut Display<B>, line: &Line) {
        let Some(command) = Command::parse(line.as_str()) else {
            return;
        };
        let history = self.editor.history();
        let (clock, power) = (&mut self.clock, &mut self.power);
        display.with_color(ColorCode::DEFAULT, |d| {
            command.execute(d, clock, power, history)
        });
    }
}
