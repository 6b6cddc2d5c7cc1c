//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the two collections live. The API
//! loads both once at startup and writes whole snapshots back; there is no
//! per-record persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in a data directory
//!   - contacts in `contacts.json`, notes in `notes.json` (names configurable)
//!   - a missing file loads as an empty collection
//!
//! - [`memory::InMemoryStore`]: keeps the last snapshot in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── contacts.json   # JSON array of contact records
//! ├── notes.json      # JSON array of notes
//! └── config.json     # PocketConfig
//! ```
//!
//! Phones, emails and birthdays are stored as their display strings. On load
//! every record and note is rebuilt through the same checks as interactive
//! input, and the collections refuse a repeated name or title, so a
//! hand-edited file with a bad value fails to load instead of producing an
//! invalid collection.

use crate::book::ContactBook;
use crate::error::Result;
use crate::notebook::NoteBook;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot storage of both collections.
pub trait DataStore {
    /// Load the contact book, or an empty one if nothing was saved yet.
    fn load_contacts(&self) -> Result<ContactBook>;

    fn save_contacts(&mut self, book: &ContactBook) -> Result<()>;

    /// Load the notebook, or an empty one if nothing was saved yet.
    fn load_notes(&self) -> Result<NoteBook>;

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()>;
}
