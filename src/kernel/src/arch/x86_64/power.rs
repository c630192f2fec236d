//! Reboot and power-off.

use log::warn;
use mljos_hal::PowerControl;
use x86_64::instructions::port::PortWriteOnly;

/// 8042 command register.
const KBC_COMMAND_PORT: u16 = 0x64;

/// 8042 command: pulse the CPU reset line.
const KBC_PULSE_RESET: u8 = 0xFE;

/// PM1a control block on QEMU's PIIX4 ACPI.
const ACPI_PM1A_CONTROL_PORT: u16 = 0x604;

/// SLP_EN with SLP_TYP 0 (S5 on QEMU).
const ACPI_SLEEP_S5: u16 = 0x2000;

/// Machine power control through the keyboard controller and ACPI.
pub struct Power {
    kbc_command: PortWriteOnly<u8>,
    pm1a_control: PortWriteOnly<u16>,
}

impl Power {
    /// Creates the power control handle.
    pub const fn new() -> Self {
        Power {
            kbc_command: PortWriteOnly::new(KBC_COMMAND_PORT),
            pm1a_control: PortWriteOnly::new(ACPI_PM1A_CONTROL_PORT),
        }
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerControl for Power {
    fn reboot(&mut self) -> ! {
        // SAFETY: resetting the machine is the intent; nothing runs after.
        unsafe { self.kbc_command.write(KBC_PULSE_RESET) };
        warn!("keyboard controller reset had no effect");
        super::halt_loop()
    }

    fn shutdown(&mut self) -> ! {
        // SAFETY: powering off is the intent; nothing runs after.
        unsafe { self.pm1a_control.write(ACPI_SLEEP_S5) };
        warn!("ACPI power-off had no effect, falling back to reset");
        self.reboot()
    }
}
