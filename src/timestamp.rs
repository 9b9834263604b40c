//! Fixed-point (seconds, microseconds) timestamps used throughout a capture.

use chrono::{Local, TimeZone};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use thiserror::Error;

const MICROS_PER_SEC: u32 = 1_000_000;

/// A timestamp with microsecond resolution: `0 <= usec < 1_000_000` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    sec: u32,
    usec: u32,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp microseconds cannot be >= 1000000, got {0}")]
    UsecOutOfRange(u32),
    #[error("timestamp cannot be negative, got {0}")]
    Negative(f64),
    #[error("timestamp value too large, got {0}")]
    TooLarge(f64),
}

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp { sec: 0, usec: 0 };

    /// Constructs a timestamp from whole seconds and a microsecond remainder.
    pub fn new(sec: u32, usec: u32) -> Result<Self, TimestampError> {
        if usec >= MICROS_PER_SEC {
            return Err(TimestampError::UsecOutOfRange(usec));
        }
        Ok(Self { sec, usec })
    }

    /// Constructs a timestamp from a non-negative number of seconds, flooring
    /// the fractional part down to whole microseconds so that e.g.
    /// `0.9999999` never rounds up to `1_000_000` usec.
    pub fn from_seconds_f64(time: f64) -> Result<Self, TimestampError> {
        if time < 0.0 {
            return Err(TimestampError::Negative(time));
        }
        let integer_seconds = time.trunc();
        if integer_seconds >= u32::MAX as f64 {
            return Err(TimestampError::TooLarge(time));
        }
        let fractional_seconds = time - integer_seconds;
        let micros = (fractional_seconds * MICROS_PER_SEC as f64).floor();
        Ok(Self {
            sec: integer_seconds as u32,
            usec: micros as u32,
        })
    }

    pub fn sec(self) -> u32 {
        self.sec
    }

    pub fn usec(self) -> u32 {
        self.usec
    }

    /// Renders as `YYYY-MM-DD HH:MM:SS.mmm` in the local timezone, millisecond precision.
    pub fn format_local(self) -> String {
        match Local.timestamp_opt(self.sec as i64, self.usec * 1000) {
            chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            _ => format!("{}.{:06}", self.sec, self.usec),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_local())
    }
}

impl Add for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Timestamp) -> Timestamp {
        let mut sec = self.sec.wrapping_add(rhs.sec);
        let mut usec = self.usec + rhs.usec;
        if usec >= MICROS_PER_SEC {
            sec = sec.wrapping_add(1);
            usec -= MICROS_PER_SEC;
        }
        Timestamp { sec, usec }
    }
}

impl AddAssign for Timestamp {
    fn add_assign(&mut self, rhs: Timestamp) {
        *self = *self + rhs;
    }
}

/// Subtraction saturates at `Timestamp::ZERO` rather than wrapping. The
/// application only ever subtracts a smaller timestamp from a larger one
/// (see `diff::pairing`), but the type itself does not trust that and never
/// produces an invalid (wrapped) result.
impl Sub for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: Timestamp) -> Timestamp {
        if self < rhs {
            return Timestamp::ZERO;
        }
        let mut sec = self.sec - rhs.sec;
        let (usec, borrow) = self.usec.overflowing_sub(rhs.usec);
        let usec = if borrow {
            sec -= 1;
            usec.wrapping_add(MICROS_PER_SEC)
        } else {
            usec
        };
        Timestamp { sec, usec }
    }
}

impl SubAssign for Timestamp {
    fn sub_assign(&mut self, rhs: Timestamp) {
        *self = *self - rhs;
    }
}
