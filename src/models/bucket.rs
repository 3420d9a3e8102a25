//! Calendar month buckets
//!
//! Every record is grouped by the calendar (year, month) of its date as seen
//! in the viewer's time zone. Buckets order chronologically because the
//! derived ordering compares `year` before `month`.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) pair; month is 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
}

impl MonthBucket {
    /// Create a bucket, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, BucketParseError> {
        if !(1..=12).contains(&month) {
            return Err(BucketParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The bucket containing `instant` in time zone `tz`
    ///
    /// No normalization happens beyond the zone conversion, so a record created
    /// a few minutes before midnight UTC on the last day of a month can land in
    /// the next month for viewers east of UTC.
    pub fn from_datetime<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> Self {
        let local = instant.with_timezone(tz);
        Self {
            year: local.year(),
            month: local.month(),
        }
    }

    /// The bucket containing "now"
    pub fn current<Tz: TimeZone>(now: &DateTime<Utc>, tz: &Tz) -> Self {
        Self::from_datetime(now, tz)
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Human-readable label, e.g. "January 2025"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, BucketParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| BucketParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| BucketParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| BucketParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

/// English month name for a 1-based month number; "Unknown" outside 1-12
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// The current bucket followed by the `count - 1` months before it, newest first
pub fn recent_months(current: MonthBucket, count: usize) -> Vec<MonthBucket> {
    std::iter::successors(Some(current), |b| Some(b.prev()))
        .take(count)
        .collect()
}

/// Years offered by budget pickers: one year back through five years ahead
pub fn year_range(current_year: i32) -> Vec<i32> {
    ((current_year - 1)..=(current_year + 5)).collect()
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthBucket {
    type Err = BucketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for bucket parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for BucketParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format (expected YYYY-MM): {}", s)
            }
            BucketParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for BucketParseError {}
