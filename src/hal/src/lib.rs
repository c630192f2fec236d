//! mljOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details.
//! The console core is written against these traits only; the kernel provides
//! the x86_64 implementations.

#![no_std]

use mljos_common::ScreenChar;

/// Trait for a memory-mapped character grid.
///
/// Cells are addressed linearly, row-major, `row * BUFFER_WIDTH + col`.
/// Implementations may assume `index < BUFFER_WIDTH * BUFFER_HEIGHT`; callers
/// check bounds first.
pub trait TextBuffer {
    /// Stores a cell.
    fn write_cell(&mut self, index: usize, cell: ScreenChar);
    /// Loads a cell.
    fn read_cell(&self, index: usize) -> ScreenChar;
    /// Moves the blinking hardware cursor to a linear cell index.
    fn move_cursor(&mut self, index: u16);
}

/// Trait for a polled keyboard controller.
pub trait KeyboardPort {
    /// Reads the status register. Bit 0 is set when a scancode is waiting.
    fn status(&mut self) -> u8;
    /// Reads the pending scancode from the data register.
    fn read_scancode(&mut self) -> u8;

    /// Returns the next scancode if one is waiting.
    fn poll(&mut self) -> Option<u8> {
        if self.status() & 0x01 != 0 {
            Some(self.read_scancode())
        } else {
            None
        }
    }
}

/// Trait for the battery-backed real-time clock.
pub trait RealTimeClock {
    /// Reads one CMOS register.
    fn read_register(&mut self, register: u8) -> u8;
}

/// Trait for machine power transitions. Neither call returns.
pub trait PowerControl {
    /// Resets the machine.
    fn reboot(&mut self) -> !;
    /// Powers the machine off.
    fn shutdown(&mut self) -> !;
}
