//! CMOS register access for the real-time clock.

use mljos_hal::RealTimeClock;
use x86_64::instructions::port::{Port, PortWriteOnly};

/// CMOS register select port.
const CMOS_INDEX_PORT: u16 = 0x70;

/// CMOS data port.
const CMOS_DATA_PORT: u16 = 0x71;

/// Set on every register select so an NMI cannot arrive between the index
/// write and the data read.
const NMI_DISABLE: u8 = 0x80;

/// The CMOS RAM holding the real-time clock registers.
pub struct Cmos {
    index: PortWriteOnly<u8>,
    data: Port<u8>,
}

impl Cmos {
    /// Creates the CMOS handle.
    pub const fn new() -> Self {
        Cmos {
            index: PortWriteOnly::new(CMOS_INDEX_PORT),
            data: Port::new(CMOS_DATA_PORT),
        }
    }
}

impl Default for Cmos {
    fn default() -> Self {
        Self::new()
    }
}

impl RealTimeClock for Cmos {
    fn read_register(&mut self, register: u8) -> u8 {
        // SAFETY: selecting a CMOS register and reading it back only reads
        // clock state. The select must be followed by the read, which the
        // &mut receiver guarantees.
        unsafe {
            self.index.write(register | NMI_DISABLE);
            self.data.read()
        }
    }
}
