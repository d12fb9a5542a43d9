//! In-memory message store.

use std::collections::VecDeque;

use crate::guestbook::entry::GuestEntry;

/// Accepted entries, newest first. Entries are never edited or removed
/// while the app runs; the list only grows at the front.
#[derive(Debug, Default)]
pub struct Guestbook {
    entries: VecDeque<GuestEntry>,
}

impl Guestbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a freshly accepted entry.
    pub fn record(&mut self, entry: GuestEntry) {
        self.entries.push_front(entry);
    }

    /// Entries in display order, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &GuestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
