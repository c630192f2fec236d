//! Shared data types for mljOS.
//!
//! Everything in this crate is plain data with no hardware access, so it can
//! be used by the kernel, the HAL traits and the host-side tests alike.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod screen;
pub mod time;

pub use error::RtcError;
pub use key::{KeyEvent, Modifiers};
pub use screen::{Color, ColorCode, CursorPosition, ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};
pub use time::{Date, Time};
