//! COM1 serial port for x86_64.
//!
//! Carries kernel log records and test harness output. Nothing here touches
//! the VGA console.

use core::fmt::{self, Write};
use spin::Mutex;
use uart_16550::SerialPort;

/// COM1 I/O port address.
const COM1_PORT: u16 = 0x3F8;

/// Global serial port, initialized once.
///
/// Locked by the logger and the `serial_print!` macros. The kernel is
/// single-threaded, so the lock is never contended outside of a panic.
pub static SERIAL: spin::Once<Mutex<SerialPort>> = spin::Once::new();

/// Initializes COM1. Later calls have no effect.
pub fn init() {
    SERIAL.call_once(|| {
        // SAFETY: COM1_PORT (0x3F8) is the standard first UART. We run in
        // ring 0 with full I/O port access, and uart_16550 performs the
        // 16550 initialization sequence itself.
        let mut serial = unsafe { SerialPort::new(COM1_PORT) };
        serial.init();
        Mutex::new(serial)
    });
}

/// Prints to the serial port without a newline.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the serial port with a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    init();
    if let Some(serial) = SERIAL.get() {
        // The UART has no failure path; a dropped byte is not worth a panic.
        let _ = serial.lock().write_fmt(args);
    }
}
