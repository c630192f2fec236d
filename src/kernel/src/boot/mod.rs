//! Boot logging with colored status indicators.
//!
//! Provides Linux-style boot messages with colored status brackets. Every
//! line is mirrored to the serial logger.

pub mod banner;

use core::fmt::{self, Write};
use mljos_common::{Color, ColorCode};
use mljos_console::Display;
use mljos_hal::TextBuffer;

/// Boot status indicators.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
    /// Failure - `[FAIL]` in red
    Fail,
    /// Warning - `[WARN]` in yellow
    Warn,
    /// Informational - `[INFO]` in cyan
    Info,
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log<B: TextBuffer>(display: &mut Display<B>, status: Status, message: impl fmt::Display) {
    print_status(display, status);
    let _ = writeln!(display, " {}", message);
    match status {
        Status::Fail => ::log::error!("boot: {}", message),
        Status::Warn => ::log::warn!("boot: {}", message),
        Status::Ok | Status::Info => ::log::info!("boot: {}", message),
    }
}

/// Log an indented detail line (for sub-items).
///
/// Format: `       Detail text` (aligned with message after status)
pub fn log_detail<B: TextBuffer>(display: &mut Display<B>, message: &str) {
    let _ = writeln!(display, "       {}", message);
    ::log::info!("boot:   {}", message);
}

fn print_status<B: TextBuffer>(display: &mut Display<B>, status: Status) {
    let (text, color) = match status {
        Status::Ok => ("[ OK ]", Color::LightGreen),
        Status::Fail => ("[FAIL]", Color::LightRed),
        Status::Warn => ("[WARN]", Color::Yellow),
        Status::Info => ("[INFO]", Color::LightCyan),
    };
    display.with_color(ColorCode::new(color, Color::Black), |d| d.puts(text));
}
