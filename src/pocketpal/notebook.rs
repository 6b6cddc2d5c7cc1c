//! The note collection, keyed by title.

use crate::error::{PocketError, Result};
use crate::model::Note;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Note>", into = "Vec<Note>")]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl TryFrom<Vec<Note>> for NoteBook {
    type Error = PocketError;

    fn try_from(notes: Vec<Note>) -> Result<Self> {
        let mut book = NoteBook::new();
        for note in notes {
            let note = note
                .revalidated()
                .map_err(|e| PocketError::Store(format!("invalid stored note: {}", e)))?;
            if book.find(note.title()).is_some() {
                return Err(PocketError::Store(format!("duplicate note '{}'", note.title())));
            }
            book.notes.push(note);
        }
        Ok(book)
    }
}

impl From<NoteBook> for Vec<Note> {
    fn from(book: NoteBook) -> Self {
        book.notes
    }
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note. Titles are unique; a second `add` with the same title fails
    /// and leaves the stored note untouched.
    pub fn add(&mut self, title: &str, body: &str) -> Result<&Note> {
        self.insert(Note::new(title, body)?)
    }

    pub fn insert(&mut self, note: Note) -> Result<&Note> {
        if self.position(note.title()).is_some() {
            return Err(PocketError::duplicate(format!(
                "note '{}' already exists",
                note.title()
            )));
        }
        self.notes.push(note);
        Ok(&self.notes[self.notes.len() - 1])
    }

    pub fn find(&self, title: &str) -> Option<&Note> {
        self.position(title).map(|pos| &self.notes[pos])
    }

    pub fn find_mut(&mut self, title: &str) -> Option<&mut Note> {
        self.position(title).map(move |pos| &mut self.notes[pos])
    }

    pub fn get(&self, title: &str) -> Result<&Note> {
        self.find(title).ok_or_else(|| note_not_found(title))
    }

    pub fn get_mut(&mut self, title: &str) -> Result<&mut Note> {
        self.find_mut(title).ok_or_else(|| note_not_found(title))
    }

    pub fn delete(&mut self, title: &str) -> Result<Note> {
        let pos = self.position(title).ok_or_else(|| note_not_found(title))?;
        Ok(self.notes.remove(pos))
    }

    pub fn edit(&mut self, title: &str, text: &str) -> Result<&Note> {
        let note = self.get_mut(title)?;
        note.edit(text);
        Ok(note)
    }

    pub fn replace(&mut self, title: &str, text: &str) -> Result<&Note> {
        let note = self.get_mut(title)?;
        note.replace(text);
        Ok(note)
    }

    pub fn add_tag(&mut self, title: &str, tag: &str) -> Result<&Note> {
        let note = self.get_mut(title)?;
        note.add_tag(tag)?;
        Ok(note)
    }

    pub fn remove_tag(&mut self, title: &str, tag: &str) -> Result<&Note> {
        let note = self.get_mut(title)?;
        note.remove_tag(tag)?;
        Ok(note)
    }

    pub fn attach_to_contact(&mut self, title: &str, name: &str) -> Result<&Note> {
        let note = self.get_mut(title)?;
        note.attach_to_contact(name);
        Ok(note)
    }

    /// Every note, or those whose title or body contains `query`, or that
    /// carry it as a tag or attached contact name.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.is_empty() {
            return self.show_all();
        }
        self.notes
            .iter()
            .filter(|n| {
                n.title().contains(query)
                    || n.body().contains(query)
                    || n.has_tag(query)
                    || n.is_attached_to(query)
            })
            .collect()
    }

    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<&Note>> {
        let found: Vec<&Note> = self.notes.iter().filter(|n| n.has_tag(tag)).collect();
        if found.is_empty() {
            return Err(tag_not_found(tag));
        }
        Ok(found)
    }

    /// Notes tagged `tag` first, then the rest; oldest first within each group.
    pub fn sort_by_tag(&self, tag: &str) -> Result<Vec<&Note>> {
        let (mut tagged, mut untagged): (Vec<&Note>, Vec<&Note>) =
            self.notes.iter().partition(|n| n.has_tag(tag));
        if tagged.is_empty() {
            return Err(tag_not_found(tag));
        }
        // sort_by_key is stable, so equal timestamps keep insertion order.
        tagged.sort_by_key(|n| n.created_at());
        untagged.sort_by_key(|n| n.created_at());
        tagged.extend(untagged);
        Ok(tagged)
    }

    pub fn show_all(&self) -> Vec<&Note> {
        self.notes.iter().collect()
    }

    pub fn show_all_for_contact(&self, name: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.is_attached_to(name)).collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    fn position(&self, title: &str) -> Option<usize> {
        let title = title.trim();
        self.notes.iter().position(|n| n.title() == title)
    }
}

fn note_not_found(title: &str) -> PocketError {
    PocketError::not_found(format!("note '{}' not found", title.trim()))
}

fn tag_not_found(tag: &str) -> PocketError {
    PocketError::not_found(format!("no notes tagged '{}'", tag))
}
