//! Chapter timestamps as printed by `ffprobe -pretty` (`H*:MM:SS.MICROS`).
//!
//! Fields are stored exactly as parsed. Ordering compares them field by field
//! (hours, minutes, seconds, microseconds) without carrying overflowing minutes
//! or seconds into the next unit, and the CUE conversion works on the raw
//! fields as well.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseError, ParseResult};

/// CUE frames per second.
pub const CUE_FRAMES_PER_SECOND: u64 = 75;

/// Largest microsecond value ffprobe prints; used as the frame scaling divisor.
const MAX_MICROS: u64 = 999_999;

/// A point in time within a media file.
///
/// The derived ordering is lexicographic over the fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Timestamp {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub microseconds: u32,
}

impl Timestamp {
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, microseconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            microseconds,
        }
    }

    /// Parses `H*:MM:SS.MICROS`, e.g. `0:00:14.348980`.
    ///
    /// Out of range minutes, seconds or microseconds are accepted verbatim.
    pub fn parse(text: &str) -> ParseResult<Self> {
        let format_error = || ParseError::TimestampFormat {
            input: text.to_string(),
        };

        let mut parts = text.split(':');
        let (Some(hours), Some(minutes), Some(rest), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format_error());
        };

        let Some((seconds, microseconds)) = rest.split_once('.') else {
            return Err(format_error());
        };

        let field = |value: &str| value.parse::<u32>().map_err(|_| format_error());

        Ok(Self {
            hours: field(hours)?,
            minutes: field(minutes)?,
            seconds: field(seconds)?,
            microseconds: field(microseconds)?,
        })
    }

    /// Total minutes (`hours * 60 + minutes`), the CUE minute field.
    #[must_use]
    pub fn cue_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }

    /// Scales microseconds into the 0..=74 frame range, truncating.
    #[must_use]
    pub fn cue_frames(&self) -> u64 {
        u64::from(self.microseconds) * (CUE_FRAMES_PER_SECOND - 1) / MAX_MICROS
    }

    /// Formats the timestamp as a CUE `INDEX` position (`M:SS:FF`).
    #[must_use]
    pub fn to_cue_format(&self) -> String {
        format!(
            "{}:{:02}:{}",
            self.cue_minutes(),
            self.seconds,
            self.cue_frames()
        )
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}.{:06}",
            self.hours, self.minutes, self.seconds, self.microseconds
        )
    }
}
