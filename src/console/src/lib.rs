//! mljOS text console.
//!
//! The interactive half of the kernel: a character grid with a cursor, a
//! scancode decoder, a bounded command history and the line editor that ties
//! them together.
//!
//! # Architecture
//!
//! - `display`: cell writes, character output, scrolling
//! - `keyboard`: raw set-1 scancodes to [`KeyEvent`]s
//! - `history`: fixed-capacity ring of accepted lines
//! - `editor`: one blocking line read, driven by polled scancodes
//! - `buffer`: an in-memory [`TextBuffer`]
//!
//! Everything here is single-threaded by contract. State is owned by plain
//! values passed around by `&mut`; nothing is global and nothing locks.
//!
//! [`KeyEvent`]: mljos_common::KeyEvent
//! [`TextBuffer`]: mljos_hal::TextBuffer

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod buffer;
pub mod display;
pub mod editor;
pub mod history;
pub mod keyboard;

pub use buffer::MemoryBuffer;
pub use display::Display;
pub use editor::{EditSession, Line, LineEditor, LINE_CAPACITY};
pub use history::{History, HISTORY_SIZE};
pub use keyboard::ScancodeDecoder;
