//! Wall-clock time from the CMOS real-time clock.
//!
//! Works on any [`RealTimeClock`] so the register protocol can be checked
//! against a fake clock.

use log::warn;
use mljos_common::time::bcd_to_binary;
use mljos_common::{Date, RtcError, Time};
use mljos_hal::RealTimeClock;

/// CMOS register numbers.
pub mod reg {
    /// Seconds.
    pub const SECONDS: u8 = 0x00;
    /// Minutes.
    pub const MINUTES: u8 = 0x02;
    /// Hours.
    pub const HOURS: u8 = 0x04;
    /// Day of month.
    pub const DAY: u8 = 0x07;
    /// Month.
    pub const MONTH: u8 = 0x08;
    /// Two-digit year.
    pub const YEAR: u8 = 0x09;
    /// Status register A.
    pub const STATUS_A: u8 = 0x0A;
    /// Status register B.
    pub const STATUS_B: u8 = 0x0B;
}

/// Status A: the clock is updating and the time registers are unstable.
const UPDATE_IN_PROGRESS: u8 = 0x80;

/// Status B: values are binary rather than BCD.
const BINARY_MODE: u8 = 0x04;

/// An update takes under 2ms; this many polls is far beyond that.
pub const UPDATE_POLL_LIMIT: usize = 1_000_000;

/// Reads the time of day.
pub fn read_time<C: RealTimeClock>(clock: &mut C) -> Result<Time, RtcError> {
    wait_for_update(clock)?;
    let second = clock.read_register(reg::SECONDS);
    let minute = clock.read_register(reg::MINUTES);
    let hour = clock.read_register(reg::HOURS);
    let decode = decoder(clock);
    Ok(Time {
        hour: decode(hour),
        minute: decode(minute),
        second: decode(second),
    })
}

/// Reads the calendar date. The clock keeps only two year digits, taken
/// to be in the 2000s.
pub fn read_date<C: RealTimeClock>(clock: &mut C) -> Result<Date, RtcError> {
    wait_for_update(clock)?;
    let day = clock.read_register(reg::DAY);
    let month = clock.read_register(reg::MONTH);
    let year = clock.read_register(reg::YEAR);
    let decode = decoder(clock);
    Ok(Date {
        day: decode(day),
        month: decode(month),
        year: 2000 + u16::from(decode(year)),
    })
}

fn wait_for_update<C: RealTimeClock>(clock: &mut C) -> Result<(), RtcError> {
    for _ in 0..UPDATE_POLL_LIMIT {
        if clock.read_register(reg::STATUS_A) & UPDATE_IN_PROGRESS == 0 {
            return Ok(());
        }
        core::hint::spin_loop();
    }
    warn!("rtc: update-in-progress flag stuck");
    Err(RtcError::UpdateTimeout)
}

fn decoder<C: RealTimeClock>(clock: &mut C) -> fn(u8) -> u8 {
    if clock.read_register(reg::STATUS_B) & BINARY_MODE == 0 {
        bcd_to_binary
    } else {
        core::convert::identity
    }
}
