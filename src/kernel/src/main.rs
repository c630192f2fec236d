//! mljOS Kernel Entry Point
//!
//! This is the main entry point for the mljOS kernel.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::fmt::Write;
use core::panic::PanicInfo;
use mljos_common::{ColorCode, CursorPosition, BUFFER_HEIGHT};
use mljos_console::Display;
use mljos_kernel::arch::{self, Cmos, Power, Ps2Keyboard, VgaBuffer};
use mljos_kernel::boot::{self, Status};
use mljos_kernel::rtc;
use mljos_kernel::serial_println;
use mljos_kernel::terminal::Shell;

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    let logger = mljos_kernel::init();

    let Some(vga) = VgaBuffer::take() else {
        serial_println!("VGA buffer already in use");
        arch::halt_loop();
    };
    let mut display = Display::new(vga);
    display.clear();
    boot::banner::print_banner(&mut display);

    boot::log(&mut display, Status::Ok, "Serial port initialized");
    match logger {
        Ok(()) => boot::log(&mut display, Status::Ok, "Serial logger installed"),
        Err(_) => boot::log(&mut display, Status::Warn, "Serial logger unavailable"),
    }
    boot::log(&mut display, Status::Ok, "VGA text console ready");
    boot::log(&mut display, Status::Info, "Keyboard is polled, interrupts stay off");

    match rtc::read_time(&mut Cmos::new()) {
        Ok(time) => boot::log(
            &mut display,
            Status::Ok,
            format_args!("Real-time clock at {}", time),
        ),
        Err(e) => boot::log(
            &mut display,
            Status::Fail,
            format_args!("Real-time clock: {}", e),
        ),
    }

    mljos_kernel::tests::run_all();
    boot::log(&mut display, Status::Ok, "Kernel self-tests passed");
    boot::log_detail(&mut display, "Results on COM1");
    display.put_char(b'\n');

    Shell::new(Ps2Keyboard::new(), Cmos::new(), Power::new()).run(&mut display)
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);

    // SAFETY: the kernel never returns from here, so the display owned by
    // kernel_main is never touched again.
    let mut display = Display::new(unsafe { VgaBuffer::steal() });
    display.set_cursor(CursorPosition::new(BUFFER_HEIGHT - 1, 0));
    display.put_char(b'\n');
    display.with_color(ColorCode::ERROR, |d| {
        let _ = writeln!(d, "!!! KERNEL PANIC !!!");
        let _ = writeln!(d, "{}", info);
    });

    arch::halt_loop()
}
