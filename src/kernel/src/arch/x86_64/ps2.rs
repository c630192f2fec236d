//! Polled PS/2 keyboard controller.

use mljos_hal::KeyboardPort;
use x86_64::instructions::port::PortReadOnly;

/// Controller status register; bit 0 means the output buffer is full.
const STATUS_PORT: u16 = 0x64;

/// Controller data register.
const DATA_PORT: u16 = 0x60;

/// The 8042 keyboard controller, read by polling.
pub struct Ps2Keyboard {
    status: PortReadOnly<u8>,
    data: PortReadOnly<u8>,
}

impl Ps2Keyboard {
    /// Creates the controller handle. The firmware leaves the controller in
    /// scancode set 1 with translation on, which is what the decoder expects.
    pub const fn new() -> Self {
        Ps2Keyboard {
            status: PortReadOnly::new(STATUS_PORT),
            data: PortReadOnly::new(DATA_PORT),
        }
    }
}

impl Default for Ps2Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardPort for Ps2Keyboard {
    fn status(&mut self) -> u8 {
        // SAFETY: reading the 8042 status register has no side effects.
        unsafe { self.status.read() }
    }

    fn read_scancode(&mut self) -> u8 {
        // SAFETY: reading the data register consumes one byte of keyboard
        // input, which is what the caller asked for.
        unsafe { self.data.read() }
    }
}
