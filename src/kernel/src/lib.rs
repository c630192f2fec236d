//! mljOS Kernel
//!
//! A small x86_64 kernel whose whole user interface is a polled text console.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: Platform-specific code (VGA, PS/2, CMOS, power, serial)
//! - `boot`: Banner and boot status lines
//! - `logger`: `log` backend on the serial port
//! - `rtc`: Time and date from the CMOS clock
//! - `terminal`: The shell and its built-in commands
//!
//! Console state (cursor, colors, history) is owned by values in
//! `kernel_main` and passed down by reference; see `mljos_console`.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![no_std]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod logger;
pub mod rtc;
pub mod terminal;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called first thing in the boot process; brings up the serial port and the
/// logger so later stages can report problems. Serial output works even when
/// the logger could not be installed.
pub fn init() -> Result<(), log::SetLoggerError> {
    #[cfg(target_arch = "x86_64")]
    arch::x86_64::serial::init();

    logger::init().map_err(|e| {
        serial_println!("logger already installed");
        e
    })
}
