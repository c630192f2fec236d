//! Wall-clock values read from the real-time clock.

use core::fmt;

/// Converts a packed BCD byte (`0x59` -> 59) to binary.
pub const fn bcd_to_binary(value: u8) -> u8 {
    (value & 0x0F) + (value >> 4) * 10
}

/// Time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    /// Hours, 0-23.
    pub hour: u8,
    /// Minutes, 0-59.
    pub minute: u8,
    /// Seconds, 0-59.
    pub second: u8,
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Full year. The clock only stores two digits, so this is `2000 + yy`.
    pub year: u16,
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bcd_digits_decode() {
        assert_eq!(bcd_to_binary(0x00), 0);
        assert_eq!(bcd_to_binary(0x09), 9);
        assert_eq!(bcd_to_binary(0x10), 10);
        assert_eq!(bcd_to_binary(0x59), 59);
        assert_eq!(bcd_to_binary(0x23), 23);
    }

    #[test]
    fn time_pads_each_field() {
        let t = Time {
            hour: 7,
            minute: 5,
            second: 0,
        };
        assert_eq!(t.to_string(), "07:05:00");
    }

    #[test]
    fn date_uses_dotted_day_first_format() {
        let d = Date {
            day: 3,
            month: 11,
            year: 2024,
        };
        assert_eq!(d.to_string(), "03.11.2024");
    }
}
