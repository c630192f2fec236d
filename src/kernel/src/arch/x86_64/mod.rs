//! x86_64 architecture support.
//!
//! Port and memory-mapped backends for the HAL traits: VGA text buffer, PS/2
//! keyboard, CMOS clock, power control, plus the COM1 serial port.

pub mod cmos;
pub mod power;
pub mod ps2;
pub mod serial;
pub mod vga;

pub use cmos::Cmos;
pub use power::Power;
pub use ps2::Ps2Keyboard;
pub use serial::SERIAL;
pub use vga::VgaBuffer;

/// Halts the CPU until the next interrupt.
///
/// Interrupts are never enabled, so this parks the CPU for good unless an
/// NMI arrives.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors and failed power transitions.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
