//! Interpret a single discussion note as a time tracking event.

use super::patterns::{is_retraction, match_addition};
use super::schema::{Contributor, NoteEvent, TimeEvent};
use crate::gitlab::Note;
use log::debug;

/// Interpret a note
///
/// Returns `None` when the body is neither a time addition nor a
/// retraction; such notes are ordinary comments and simply ignored.
pub fn interpret_note(note: &Note) -> Option<NoteEvent> {
    interpret_comment(&note.author.name, &note.body)
}

/// Interpret a comment given its author display name and body
pub fn interpret_comment(author: &str, body: &str) -> Option<NoteEvent> {
    let event = classify_body(body)?;
    let contributor = Contributor::new(author);

    debug!("Note by {}: {:?}", contributor, event);

    Some(NoteEvent { contributor, event })
}

/// Classify a note body; retraction takes precedence over addition
pub fn classify_body(body: &str) -> Option<TimeEvent> {
    if is_retraction(body) {
        return Some(TimeEvent::Retraction);
    }
    match_addition(body).map(|m| TimeEvent::Addition(m.minutes()))
}
