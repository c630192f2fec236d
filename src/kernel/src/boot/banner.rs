//! Boot banner.

use crate::terminal::commands::COMMAND_LIST;
use core::fmt::Write;
use mljos_console::Display;
use mljos_hal::TextBuffer;

/// Print the welcome line and the command list.
pub fn print_banner<B: TextBuffer>(display: &mut Display<B>) {
    display.puts("Welcome to mljOS by foxgalaxy23\n");
    let _ = writeln!(display, "Commands: {}\n", COMMAND_LIST);
}
