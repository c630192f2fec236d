//! VGA text mode framebuffer for x86_64.
//!
//! Exposes the text buffer at 0xB8000 and the CRT controller's cursor
//! registers as a [`TextBuffer`]. Character output, scrolling and colors are
//! handled by [`mljos_console::Display`] on top of it.

use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};
use mljos_common::{ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};
use mljos_hal::TextBuffer;
use x86_64::instructions::port::Port;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// CRT controller index register.
const CRTC_INDEX_PORT: u16 = 0x3D4;

/// CRT controller data register.
const CRTC_DATA_PORT: u16 = 0x3D5;

/// CRTC register holding the high byte of the cursor location.
const CURSOR_LOCATION_HIGH: u8 = 0x0E;

/// CRTC register holding the low byte of the cursor location.
const CURSOR_LOCATION_LOW: u8 = 0x0F;

const CELLS: usize = BUFFER_WIDTH * BUFFER_HEIGHT;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [ScreenChar; CELLS],
}

/// Set once the buffer has been handed out.
static TAKEN: AtomicBool = AtomicBool::new(false);

/// Exclusive handle to the VGA text buffer and hardware cursor.
pub struct VgaBuffer {
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is always mapped in x86 real/protected mode.
    buffer: *mut Buffer,
    crtc_index: Port<u8>,
    crtc_data: Port<u8>,
}

// SAFETY: VgaBuffer only accesses the VGA buffer through volatile operations,
// and at most one handle exists outside of `steal`.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Returns the handle the first time it is called, `None` afterwards.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            // SAFETY: TAKEN guarantees this is the only handle.
            Some(unsafe { Self::steal() })
        }
    }

    /// Creates a handle regardless of whether one already exists.
    ///
    /// # Safety
    ///
    /// The caller must make sure no other handle is used afterwards, e.g.
    /// because the kernel is panicking and will never return to it.
    pub unsafe fn steal() -> Self {
        TAKEN.store(true, Ordering::Release);
        VgaBuffer {
            // SAFETY: VGA_BUFFER_ADDR (0xB8000) is the standard VGA text buffer
            // address on x86 systems. This memory is always present and mapped
            // when running on x86 hardware or in QEMU.
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
            crtc_index: Port::new(CRTC_INDEX_PORT),
            crtc_data: Port::new(CRTC_DATA_PORT),
        }
    }
}

impl TextBuffer for VgaBuffer {
    fn write_cell(&mut self, index: usize, cell: ScreenChar) {
        if index >= CELLS {
            return;
        }
        // SAFETY: index < CELLS was checked above and the buffer pointer is
        // valid for the kernel's lifetime. Using volatile write because the VGA
        // buffer is memory-mapped I/O that may be read by hardware at any time.
        unsafe {
            ptr::write_volatile(&mut (*self.buffer).chars[index], cell);
        }
    }

    fn read_cell(&self, index: usize) -> ScreenChar {
        if index >= CELLS {
            return ScreenChar::BLANK;
        }
        // SAFETY: as in write_cell.
        unsafe { ptr::read_volatile(&(*self.buffer).chars[index]) }
    }

    fn move_cursor(&mut self, index: u16) {
        let [low, high] = index.to_le_bytes();
        // SAFETY: 0x3D4/0x3D5 are the color CRTC ports; registers 0x0E/0x0F
        // only move the cursor and have no other side effects.
        unsafe {
            self.crtc_index.write(CURSOR_LOCATION_LOW);
            self.crtc_data.write(low);
            self.crtc_index.write(CURSOR_LOCATION_HIGH);
            self.crtc_data.write(high);
        }
    }
}
