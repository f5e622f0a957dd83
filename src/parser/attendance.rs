//! Lab session attendance tables embedded in a wiki page.
//!
//! Row layout: `| date | (ignored) | first last | ... | start | ... | end |`.
//! Start and end are the first two cells after the name that read as
//! 12-hour clock times.

use super::patterns::{find_lab_session_tables, match_date_cell, parse_clock_time};
use super::schema::{AttendanceRow, Contributor, MonthDay};
use crate::utils::error::ParseError;
use log::{debug, warn};

const DATE_COLUMN: usize = 0;
const NAME_COLUMN: usize = 2;
const MIN_COLUMNS: usize = 5;

/// Parse every attendance row of every lab session table in `content`
///
/// Header and separator lines are skipped silently. Rows that look like
/// data but cannot be interpreted are skipped with a warning.
pub fn parse_attendance(content: &str) -> Vec<AttendanceRow> {
    let tables = find_lab_session_tables(content);
    debug!("Found {} lab session tables", tables.len());

    let mut rows = Vec::new();
    for table in &tables {
        for line in &table.rows {
            match parse_attendance_row(line) {
                Ok(Some(row)) => rows.push(row),
                Ok(None) => {}
                Err(e) => warn!("Skipping row in Group Lab Session {}: {}", table.session, e),
            }
        }
    }

    debug!("Parsed {} attendance rows", rows.len());
    rows
}

/// Parse one table line
///
/// # Returns
/// * `Ok(None)` - not a data row (header, separator)
/// * `Ok(Some(row))` - a complete attendance record
/// * `Err(_)` - a dated row whose contents are unusable or incomplete
pub fn parse_attendance_row(line: &str) -> Result<Option<AttendanceRow>, ParseError> {
    let cells = split_cells(line);

    let Some(fields) = cells.get(DATE_COLUMN).and_then(|cell| match_date_cell(cell)) else {
        return Ok(None);
    };
    if cells.len() < MIN_COLUMNS {
        return Err(ParseError::MissingTimes(line.trim().to_string()));
    }
    let date = resolve_date(fields).ok_or_else(|| ParseError::InvalidDate(cells[DATE_COLUMN].to_string()))?;

    let contributor = Contributor::new(cells[NAME_COLUMN]);
    if contributor.as_str().is_empty() {
        return Err(ParseError::MissingContributor(line.trim().to_string()));
    }

    let mut times = cells[NAME_COLUMN + 1..]
        .iter()
        .filter_map(|cell| parse_clock_time(cell).map(|time| (*cell, time)));
    let (Some((start_text, start)), Some((end_text, end))) = (times.next(), times.next()) else {
        return Err(ParseError::MissingTimes(line.trim().to_string()));
    };

    let minutes = (end - start).num_minutes();
    if minutes < 0 {
        return Err(ParseError::NegativeSpan {
            start: start_text.to_string(),
            end: end_text.to_string(),
        });
    }

    Ok(Some(AttendanceRow {
        date,
        contributor,
        minutes: minutes as u64,
    }))
}

/// Read date fields as day/month, falling back to month/day when the
/// second field cannot be a month
fn resolve_date((first, second): (u32, u32)) -> Option<MonthDay> {
    MonthDay::new(second, first).or_else(|| MonthDay::new(first, second))
}

fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(str::trim).collect()
}
