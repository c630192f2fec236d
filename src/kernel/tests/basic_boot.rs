#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(mljos_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use mljos_common::{ColorCode, CursorPosition, BUFFER_HEIGHT};
use mljos_console::Display;
use mljos_kernel::arch::{Cmos, VgaBuffer};
use mljos_kernel::rtc;
use mljos_kernel::testutil::{exit_qemu, QemuExitCode};

entry_point!(test_kernel_main);

fn test_kernel_main(_boot_info: &'static BootInfo) -> ! {
    // A failed logger install only loses log records, not test output.
    let _ = mljos_kernel::init();
    test_main();
    exit_qemu(QemuExitCode::Success)
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    mljos_kernel::testutil::test_panic_handler(info)
}

fn vga() -> Display<VgaBuffer> {
    // SAFETY: test cases run one at a time and drop their handle.
    Display::new(unsafe { VgaBuffer::steal() })
}

#[test_case]
fn vga_cells_read_back() {
    let mut display = vga();
    display.clear();
    display.puts("mljOS");
    let cell = display.cell(0, 0).map(|c| (c.ascii_character, c.color_code));
    assert_eq!(cell, Some((b'm', ColorCode::DEFAULT)));
    assert_eq!(display.cursor(), CursorPosition::new(0, 5));
}

#[test_case]
fn vga_scrolls_at_bottom_row() {
    let mut display = vga();
    display.clear();
    display.puts("top\n");
    for _ in 0..BUFFER_HEIGHT {
        display.put_char(b'\n');
    }
    assert_eq!(display.cursor(), CursorPosition::new(BUFFER_HEIGHT - 1, 0));
    assert_eq!(display.cell(0, 0).map(|c| c.ascii_character), Some(b' '));
}

#[test_case]
fn cmos_reports_a_plausible_clock() {
    let mut cmos = Cmos::new();
    let time = rtc::read_time(&mut cmos).expect("rtc time");
    assert!(time.hour < 24 && time.minute < 60 && time.second < 60);
    let date = rtc::read_date(&mut cmos).expect("rtc date");
    assert!((1..=12).contains(&date.month) && (1..=31).contains(&date.day));
}
