use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FormatError;

// @module: Fixed-point SRT timecode

// @const: canonical timecode pattern, hours at least two digits
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

/// A non-negative point in time with millisecond resolution.
///
/// Stored as whole milliseconds so that boundary comparisons in the merger
/// are exact integer equality, never float tolerance, and so that the
/// textual `HH:MM:SS,mmm` form round-trips without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeCode(u64);

impl TimeCode {
    /// The zero timecode
    pub const ZERO: TimeCode = TimeCode(0);

    // @creates: Timecode from a millisecond count
    pub fn from_millis(ms: u64) -> Self {
        TimeCode(ms)
    }

    // @creates: Timecode from clock components
    pub fn from_components(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Self {
        TimeCode((hours * 3600 + minutes * 60 + seconds) * 1000 + millis)
    }

    // @returns: Whole milliseconds since zero
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Parse the canonical `HH:MM:SS,mmm` form.
    ///
    /// Hours accept two or more digits so that values formatted past the
    /// 99-hour mark parse back to the same timecode; minutes, seconds and
    /// milliseconds are fixed-width. Anything else fails with
    /// `FormatError::InvalidTimestamp`.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidTimestamp(text.to_string());
        let caps = TIMECODE_REGEX.captures(text).ok_or_else(invalid)?;

        let hours: u64 = caps[1].parse().map_err(|_| invalid())?;
        let minutes: u64 = caps[2].parse().map_err(|_| invalid())?;
        let seconds: u64 = caps[3].parse().map_err(|_| invalid())?;
        let millis: u64 = caps[4].parse().map_err(|_| invalid())?;

        Ok(Self::from_components(hours, minutes, seconds, millis))
    }

    /// Format as `HH:MM:SS,mmm` with zero-padding.
    ///
    /// The hours field is at least two digits and widens as needed.
    pub fn format(&self) -> String {
        let hours = self.0 / 3_600_000;
        let minutes = (self.0 % 3_600_000) / 60_000;
        let seconds = (self.0 % 60_000) / 1_000;
        let millis = self.0 % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
