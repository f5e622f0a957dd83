//! Per-contributor minute accumulator.

use crate::parser::{Contributor, NoteEvent, TimeEvent};
use std::collections::BTreeMap;

/// Minutes spent per contributor
///
/// Entries are kept sorted by contributor so reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeLedger {
    entries: BTreeMap<Contributor, u64>,
}

impl TimeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add minutes for a contributor, creating the entry if needed
    pub fn add(&mut self, contributor: Contributor, minutes: u64) {
        let entry = self.entries.entry(contributor).or_insert(0);
        *entry = entry.saturating_add(minutes);
    }

    /// Zero a contributor's running total
    ///
    /// A contributor with no entry stays absent.
    pub fn retract(&mut self, contributor: &Contributor) {
        if let Some(minutes) = self.entries.get_mut(contributor) {
            *minutes = 0;
        }
    }

    /// Fold one note event into the ledger
    pub fn apply(&mut self, event: NoteEvent) {
        match event.event {
            TimeEvent::Addition(minutes) => self.add(event.contributor, minutes),
            TimeEvent::Retraction => self.retract(&event.contributor),
        }
    }

    /// Add every entry of `other` into this ledger
    pub fn merge(&mut self, other: &TimeLedger) {
        for (contributor, minutes) in &other.entries {
            self.add(contributor.clone(), *minutes);
        }
    }

    /// Minutes recorded for a contributor, if they have an entry
    pub fn get(&self, contributor: &Contributor) -> Option<u64> {
        self.entries.get(contributor).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Contributor, u64)> {
        self.entries.iter().map(|(contributor, minutes)| (contributor, *minutes))
    }

    /// Sum of all entries
    pub fn total_minutes(&self) -> u64 {
        self.entries.values().fold(0, |acc, m| acc.saturating_add(*m))
    }
}
