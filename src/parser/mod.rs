//! Text parsing for time tracking data.
//!
//! This module handles:
//! - Matching the fixed note and wiki patterns
//! - Interpreting notes as time events
//! - Parsing lab session attendance tables
//! - Defining the shared domain types

pub mod attendance;
pub mod note;
pub mod patterns;
pub mod schema;

// Re-export main types
pub use attendance::{parse_attendance, parse_attendance_row};
pub use note::{classify_body, interpret_comment, interpret_note};
pub use schema::{AttendanceRow, Contributor, MonthDay, NoteEvent, TimeEvent};
