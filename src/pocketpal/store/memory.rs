use super::DataStore;
use crate::book::ContactBook;
use crate::error::Result;
use crate::notebook::NoteBook;

/// In-memory storage for testing.
/// Keeps the last saved snapshot; nothing touches the disk.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: ContactBook,
    notes: NoteBook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(mut self, contacts: ContactBook) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_notes(mut self, notes: NoteBook) -> Self {
        self.notes = notes;
        self
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    /// How many snapshots of either collection were written.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<ContactBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &ContactBook) -> Result<()> {
        self.contacts = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteBook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        self.notes = notes.clone();
        self.saves += 1;
        Ok(())
    }
}
