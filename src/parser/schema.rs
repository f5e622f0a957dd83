//! Domain types produced by the parsers.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A person whose time is being tracked
///
/// Always the full display name, trimmed, with internal whitespace runs
/// collapsed to a single space. Every ingestion point goes through
/// `Contributor::new`, so GitLab authors and attendance rows share keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Contributor(String);

impl Contributor {
    pub fn new(display_name: &str) -> Self {
        Self(display_name.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Contributor {
    fn from(name: &str) -> Self {
        Contributor::new(name)
    }
}

/// One time tracking event extracted from a note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEvent {
    /// Time spent was added, in minutes
    Addition(u64),
    /// Time spent was removed
    Retraction,
}

/// A time event attributed to the note's author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEvent {
    pub contributor: Contributor,
    pub event: TimeEvent,
}

/// Calendar day without a year, ordered by (month, day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Build a month/day pair, rejecting days that exist in no year
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so 29 February is accepted
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// One parsed row of a lab session attendance table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub date: MonthDay,
    pub contributor: Contributor,
    /// Wall-clock span between sign-in and sign-out
    pub minutes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contributor_normalization() {
        assert_eq!(Contributor::new("  John   Smith "), Contributor::new("John Smith"));
        assert_eq!(Contributor::new("John\tSmith").as_str(), "John Smith");
    }

    #[test]
    fn test_month_day_ordering() {
        let jan_31 = MonthDay::new(1, 31).unwrap();
        let feb_1 = MonthDay::new(2, 1).unwrap();
        assert!(jan_31 < feb_1);
    }

    #[test]
    fn test_month_day_validation() {
        assert!(MonthDay::new(2, 29).is_some());
        assert!(MonthDay::new(2, 30).is_none());
        assert!(MonthDay::new(13, 1).is_none());
        assert!(MonthDay::new(4, 0).is_none());
    }
}
