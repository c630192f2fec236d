//! Built-in shell commands.
//!
//! A finished line is matched against a fixed table by prefix, first match
//! wins. There is no argument parsing beyond the text after `echo `.

use crate::rtc;
use core::fmt::Write;
use log::debug;
use mljos_common::ColorCode;
use mljos_console::{Display, History};
use mljos_hal::{PowerControl, RealTimeClock, TextBuffer};

/// Text printed by `help` and the boot banner.
pub const COMMAND_LIST: &str = "time, date, echo, shutdown, reboot, clear, history, help";

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Print the time of day.
    Time,
    /// Print the date.
    Date,
    /// Print the text after `echo `.
    Echo(&'a str),
    /// Reset the machine.
    Reboot,
    /// Power the machine off.
    Shutdown,
    /// Clear the screen.
    Clear,
    /// List remembered lines.
    History,
    /// Display help information.
    Help,
    /// Unknown command; holds the whole line.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Matches `line` against the command table. `None` for an empty line.
    pub fn parse(line: &'a str) -> Option<Self> {
        if line.is_empty() {
            return None;
        }
        let command = if line.starts_with("time") {
            Command::Time
        } else if line.starts_with("date") {
            Command::Date
        } else if let Some(rest) = line.strip_prefix("echo ") {
            Command::Echo(rest)
        } else if line.starts_with("echo") {
            Command::Echo("")
        } else if line.starts_with("reboot") {
            Command::Reboot
        } else if line.starts_with("shutdown") {
            Command::Shutdown
        } else if line.starts_with("clear") {
            Command::Clear
        } else if line.starts_with("history") {
            Command::History
        } else if line.starts_with("help") {
            Command::Help
        } else {
            Command::Unknown(line)
        };
        Some(command)
    }

    /// Runs the command, writing its output to `display`.
    ///
    /// `Reboot` and `Shutdown` never return.
    pub fn execute<B, C, P>(
        self,
        display: &mut Display<B>,
        clock: &mut C,
        power: &mut P,
        history: &History,
    ) where
        B: TextBuffer,
        C: RealTimeClock,
        P: PowerControl,
    {
        debug!("shell: {:?}", self);
        match self {
            Command::Time => match rtc::read_time(clock) {
                Ok(time) => {
                    let _ = writeln!(display, "{}", time);
                }
                Err(e) => print_error(display, e),
            },
            Command::Date => match rtc::read_date(clock) {
                Ok(date) => {
                    let _ = writeln!(display, "{}", date);
                }
                Err(e) => print_error(display, e),
            },
            Command::Echo(text) => {
                display.puts(text);
                display.put_char(b'\n');
            }
            Command::Reboot => {
                display.with_color(ColorCode::ALERT, |d| d.puts("Rebooting...\n"));
                power.reboot();
            }
            Command::Shutdown => {
                display.with_color(ColorCode::ALERT, |d| d.puts("Shutdown...\n"));
                power.shutdown();
            }
            Command::Clear => display.clear(),
            Command::History => {
                for (n, entry) in history.iter().enumerate() {
                    let _ = write!(display, "{:>3}  ", n + 1);
                    for &byte in entry {
                        display.put_char(byte);
                    }
                    display.put_char(b'\n');
                }
            }
            Command::Help => {
                let _ = writeln!(display, "Commands: {}", COMMAND_LIST);
            }
            // Raw bytes, like echo; `write!` would turn control bytes into 0xfe.
            Command::Unknown(line) => {
                display.with_color(ColorCode::ERROR, |d| {
                    d.puts("Unknown command: ");
                    d.puts(line);
                    d.put_char(b'\n');
                });
            }
        }
    }
}

fn print_error<B: TextBuffer>(display: &mut Display<B>, error: impl core::fmt::Display) {
    display.with_color(ColorCode::ERROR, |d| {
        let _ = writeln!(d, "error: {}", error);
    });
}
