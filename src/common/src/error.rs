//! System-wide error types for mljOS.

use core::fmt;

/// Real-time clock error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RtcError {
    /// The update-in-progress flag never cleared.
    UpdateTimeout,
}

impl fmt::Display for RtcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtcError::UpdateTimeout => write!(f, "RTC update did not finish"),
        }
    }
}
