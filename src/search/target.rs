//! Render targets the controller draws entries into.

use super::entry::Entry;
use std::io::{self, Write};

/// A surface that displays a list of entries.
pub trait RenderTarget {
    /// Remove every entry.
    fn clear(&mut self);

    /// Add an entry at the end.
    fn append(&mut self, entry: Entry);
}

/// In-memory entry list with a selection cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
    selected: usize,
}

impl EntryList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: 0,
        }
    }

    /// Entries in display order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the selected entry (meaningless when empty)
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// The selected entry, if any
    #[must_use]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// Move selection down, wrapping at the end
    pub const fn select_next(&mut self) {
        let count = self.entries.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Move selection up, wrapping at the start
    pub const fn select_prev(&mut self) {
        let count = self.entries.len();
        if count > 0 {
            self.selected = match self.selected.checked_sub(1) {
                Some(prev) => prev,
                None => count - 1,
            };
        }
    }
}

impl RenderTarget for EntryList {
    fn clear(&mut self) {
        self.entries.clear();
        self.selected = 0;
    }

    fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

/// Writes one line per entry to a writer; used by the one-shot CLI commands.
///
/// `clear` is a no-op since written lines cannot be taken back.
#[derive(Debug)]
pub struct PlainText<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> PlainText<W> {
    /// Wrap a writer
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush and return the writer, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error hit while writing entries.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_entry(&mut self, entry: &Entry) -> io::Result<()> {
        match entry {
            Entry::User(user) => writeln!(self.writer, "{}\t{}", user.username, user.profile.href),
            Entry::Repo(repo) => writeln!(self.writer, "{}", repo.text),
        }
    }
}

impl<W: Write> RenderTarget for PlainText<W> {
    fn clear(&mut self) {}

    fn append(&mut self, entry: Entry) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_entry(&entry) {
            self.error = Some(err);
        }
    }
}
