//! Test harness for code that can only run on the machine itself.
//!
//! Used two ways: [`run_tests`] drives the self-checks in [`crate::tests`] at
//! every boot, and [`test_runner`] is the `custom_test_frameworks` runner for
//! the QEMU test binaries under `tests/`, which report through the
//! isa-debug-exit device.
//!
//! Output goes to COM1 only, one line per test:
//!
//! ```text
//! self-test: 3 tests
//!   command_parsing ... ok
//! ```

use crate::{serial_print, serial_println};

/// Port of QEMU's isa-debug-exit device (`-device isa-debug-exit,iobase=0xf4`).
const ISA_DEBUG_EXIT_PORT: u16 = 0xf4;

/// Values written to the isa-debug-exit device. QEMU exits with
/// `(value << 1) | 1`, so `Success` is 33, the `test-success-exit-code`
/// bootimage expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// A test panicked.
    Failed = 0x11,
}

/// Stops QEMU with `exit_code`. Outside QEMU the write is ignored and the
/// CPU halts.
pub fn exit_qemu(exit_code: QemuExitCode) -> ! {
    #[cfg(target_arch = "x86_64")]
    {
        use x86_64::instructions::port::PortWriteOnly;

        // SAFETY: the port is either QEMU's exit device or unassigned, and
        // nothing runs after this write either way.
        unsafe {
            PortWriteOnly::<u32>::new(ISA_DEBUG_EXIT_PORT).write(exit_code as u32);
        }
    }
    crate::arch::halt_loop()
}

/// A named check that panics on failure.
pub trait Testable {
    /// Function name without its module path.
    fn name(&self) -> &'static str;
    /// Runs the check and prints its result line.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn name(&self) -> &'static str {
        let path = core::any::type_name::<T>();
        path.rsplit("::").next().unwrap_or(path)
    }

    fn run(&self) {
        serial_print!("  {} ... ", self.name());
        self();
        serial_println!("ok");
    }
}

/// Runs `tests` in order. A failure panics, so returning means all passed.
pub fn run_tests(suite: &str, tests: &[&dyn Testable]) {
    serial_println!("{}: {} tests", suite, tests.len());
    for test in tests {
        test.run();
    }
    serial_println!("{}: all passed", suite);
}

/// `#![test_runner]` for the QEMU test binaries. Exits QEMU on success.
pub fn test_runner(tests: &[&dyn Testable]) {
    run_tests("qemu", tests);
    exit_qemu(QemuExitCode::Success);
}

/// Body of a test binary's `#[panic_handler]`.
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("FAILED");
    serial_println!("{}", info);
    exit_qemu(QemuExitCode::Failed)
}
