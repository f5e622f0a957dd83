//! Fixed textual patterns recognized in notes and wiki pages.
//!
//! Each pattern has one matching function returning a structured result,
//! so they can be tested without a data source.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

// "added 2h", "added 45m", "added 1h 30m of time spent at 2024-03-15"
static ADDITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^added (\d+)([hm])(?: (\d+)m)?").expect("valid addition regex"));

static RETRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^removed time spent").expect("valid retraction regex"));

// Heading "Group Lab Session <N>" followed (after optional blank lines) by pipe rows
static LAB_SESSION_TABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^#{1,6}[ \t]*Group Lab Session[ \t]+(\d+)[^\n]*\n(?:[ \t]*\n)*((?:[ \t]*\|[^\n]*(?:\n|$))+)",
    )
    .expect("valid lab session regex")
});

// "2:30pm", "2.30 PM", "2pm"
static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{1,2})(?:[:.](\d{2}))?\s*([ap]m)$").expect("valid clock time regex")
});

// "15/03/2024", "3/4/24"
static DATE_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$").expect("valid date regex"));

/// Unit of the leading amount in an addition note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
}

/// Captures of the addition pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditionMatch {
    pub amount: u64,
    pub unit: TimeUnit,
    /// Trailing minutes, as in "added 1h 30m"
    pub remainder: Option<u64>,
}

impl AdditionMatch {
    /// Total minutes expressed by the match
    pub fn minutes(&self) -> u64 {
        let whole = match self.unit {
            TimeUnit::Hours => self.amount.saturating_mul(60),
            TimeUnit::Minutes => self.amount,
        };
        whole.saturating_add(self.remainder.unwrap_or(0))
    }
}

/// A lab session block found in wiki content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabSessionTable {
    /// Session number as written in the heading
    pub session: String,
    /// The pipe-delimited lines following the heading
    pub rows: Vec<String>,
}

/// Match an "added ..." time tracking note
pub fn match_addition(body: &str) -> Option<AdditionMatch> {
    let captures = ADDITION.captures(body)?;

    let amount = captures.get(1)?.as_str().parse().ok()?;
    let unit = match captures.get(2)?.as_str() {
        "h" => TimeUnit::Hours,
        _ => TimeUnit::Minutes,
    };
    let remainder = match captures.get(3) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(AdditionMatch {
        amount,
        unit,
        remainder,
    })
}

/// True if the note removes time spent
pub fn is_retraction(body: &str) -> bool {
    RETRACTION.is_match(body)
}

/// Find every "Group Lab Session" table in wiki markup
pub fn find_lab_session_tables(content: &str) -> Vec<LabSessionTable> {
    let content = content.replace("\r\n", "\n");

    LAB_SESSION_TABLE
        .captures_iter(&content)
        .filter_map(|captures| {
            let session = captures.get(1)?.as_str().to_string();
            let rows = captures
                .get(2)?
                .as_str()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            Some(LabSessionTable { session, rows })
        })
        .collect()
}

/// Parse a 12-hour clock time such as "2:30pm" or "2pm"
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let captures = CLOCK_TIME.captures(text.trim())?;

    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match captures.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if !(1..=12).contains(&hour) {
        return None;
    }

    let is_pm = captures.get(3)?.as_str().eq_ignore_ascii_case("pm");
    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Split a `a/b/y` date cell into its two leading numeric fields
///
/// Returns `None` when the cell is not date-shaped at all.
pub fn match_date_cell(text: &str) -> Option<(u32, u32)> {
    let captures = DATE_CELL.captures(text.trim())?;
    let first = captures.get(1)?.as_str().parse().ok()?;
    let second = captures.get(2)?.as_str().parse().ok()?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_hours() {
        let m = match_addition("added 2h of time spent").unwrap();
        assert_eq!(m.unit, TimeUnit::Hours);
        assert_eq!(m.minutes(), 120);
    }

    #[test]
    fn test_addition_minutes() {
        assert_eq!(match_addition("added 45m").unwrap().minutes(), 45);
    }

    #[test]
    fn test_addition_hours_and_minutes() {
        let m = match_addition("added 1h 30m of time spent at 2024-03-15").unwrap();
        assert_eq!(m.remainder, Some(30));
        assert_eq!(m.minutes(), 90);
    }

    #[test]
    fn test_addition_must_lead_the_note() {
        assert!(match_addition("I have added 2h to the estimate").is_none());
        assert!(match_addition("added some time").is_none());
        assert!(match_addition("changed time estimate to 2h").is_none());
    }

    #[test]
    fn test_retraction() {
        assert!(is_retraction("removed time spent"));
        assert!(!is_retraction("added 1h"));
        assert!(!is_retraction("someone removed time spent"));
    }

    #[test]
    fn test_clock_times() {
        assert_eq!(parse_clock_time("2:30pm"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_clock_time("2pm"), NaiveTime::from_hms_opt(14, 0, 0));
        assert_eq!(parse_clock_time("9.15 AM"), NaiveTime::from_hms_opt(9, 15, 0));
        assert_eq!(parse_clock_time("12am"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_clock_time("12:05pm"), NaiveTime::from_hms_opt(12, 5, 0));
    }

    #[test]
    fn test_invalid_clock_times() {
        assert!(parse_clock_time("14:00").is_none());
        assert!(parse_clock_time("13pm").is_none());
        assert!(parse_clock_time("0am").is_none());
        assert!(parse_clock_time("2:75pm").is_none());
        assert!(parse_clock_time("noon").is_none());
    }

    #[test]
    fn test_date_cell() {
        assert_eq!(match_date_cell("15/03/2024"), Some((15, 3)));
        assert_eq!(match_date_cell(" 3/4/24 "), Some((3, 4)));
        assert_eq!(match_date_cell("Date"), None);
        assert_eq!(match_date_cell("-----"), None);
    }

    #[test]
    fn test_find_lab_session_tables() {
        let wiki = "# Lab times\r\n\
                    #### Group Lab Session 1 (week 2)\r\n\
                    | Date | Room | Name | In | Out |\r\n\
                    |------|------|------|----|-----|\r\n\
                    | 15/03/2024 | A | John Smith | 2pm | 3pm |\r\n\
                    \r\n\
                    Some notes\r\n\
                    #### Group Lab Session 2\r\n\
                    \r\n\
                    | 22/03/2024 | A | Jane Doe | 1pm | 2pm |";

        let tables = find_lab_session_tables(wiki);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].session, "1");
        assert_eq!(tables[0].rows.len(), 3);
        assert_eq!(tables[1].session, "2");
        assert_eq!(tables[1].rows, vec!["| 22/03/2024 | A | Jane Doe | 1pm | 2pm |"]);
    }

    #[test]
    fn test_large_session_number_keeps_table() {
        let wiki = "#### Group Lab Session 99999999999\n| 15/03/2024 | A | John Smith | 2pm | 3pm |\n";
        let tables = find_lab_session_tables(wiki);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].session, "99999999999");
        assert_eq!(tables[0].rows.len(), 1);
    }

    #[test]
    fn test_heading_without_table_is_ignored() {
        let wiki = "#### Group Lab Session 3\n\nNo table yet.\n";
        assert!(find_lab_session_tables(wiki).is_empty());
    }
}
