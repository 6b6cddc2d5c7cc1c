use super::DataStore;
use crate::book::ContactBook;
use crate::config::{DEFAULT_CONTACTS_FILE, DEFAULT_NOTES_FILE};
use crate::error::{PocketError, Result};
use crate::notebook::NoteBook;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            contacts_file: DEFAULT_CONTACTS_FILE.to_string(),
            notes_file: DEFAULT_NOTES_FILE.to_string(),
        }
    }

    pub fn with_files(mut self, contacts_file: &str, notes_file: &str) -> Self {
        self.contacts_file = contacts_file.to_string();
        self.notes_file = notes_file.to_string();
        self
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PocketError::Io)?;
        }
        Ok(())
    }

    fn load_json<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(PocketError::Io)?;
        let value = serde_json::from_str(&content).map_err(PocketError::Serialization)?;
        info!("Loaded {}", path.display());
        Ok(value)
    }

    fn save_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(PocketError::Serialization)?;
        fs::write(path, content).map_err(PocketError::Io)?;
        info!("Saved {}", path.display());
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<ContactBook> {
        self.load_json(&self.contacts_path())
    }

    fn save_contacts(&mut self, book: &ContactBook) -> Result<()> {
        self.save_json(&self.contacts_path(), book)
    }

    fn load_notes(&self) -> Result<NoteBook> {
        self.load_json(&self.notes_path())
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        self.save_json(&self.notes_path(), notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use tempfile::TempDir;

    #[test]
    fn missing_files_load_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("not-yet"));
        assert!(store.load_contacts().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn snapshot_roundtrip_creates_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        let mut book = ContactBook::new();
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_birthday("12.06.1990").unwrap();
        record.attach_note("plan");
        book.add_record(record);

        let mut notes = NoteBook::new();
        notes.add("plan", "trip").unwrap();
        notes.add_tag("plan", "summer").unwrap();
        notes.attach_to_contact("plan", "Ann").unwrap();

        store.save_contacts(&book).unwrap();
        store.save_notes(&notes).unwrap();
        assert!(store.contacts_path().exists());

        assert_eq!(store.load_contacts().unwrap(), book);
        assert_eq!(store.load_notes().unwrap(), notes);
    }

    #[test]
    fn custom_file_names() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).with_files("people.json", "memo.json");
        store.save_notes(&NoteBook::new()).unwrap();
        assert!(dir.path().join("memo.json").exists());
        assert_eq!(store.contacts_path(), dir.path().join("people.json"));
    }

    #[test]
    fn invalid_stored_phone_fails_to_load() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONTACTS_FILE),
            r#"[{"name": "Ann", "phones": ["12"]}]"#,
        )
        .unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.load_contacts(),
            Err(PocketError::Serialization(_))
        ));
    }

    fn load_contacts_from(json: &str) -> Result<ContactBook> {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONTACTS_FILE), json).unwrap();
        FileStore::new(dir.path().to_path_buf()).load_contacts()
    }

    fn assert_refused(loaded: Result<impl std::fmt::Debug>, reason: &str) {
        match loaded {
            Err(PocketError::Serialization(e)) => {
                assert!(e.to_string().contains(reason), "unexpected error: {}", e)
            }
            other => panic!("expected a refused snapshot, got {:?}", other),
        }
    }

    #[test]
    fn repeated_contact_name_fails_to_load() {
        assert_refused(
            load_contacts_from(r#"[{"name": "Ann"}, {"name": "Ann"}]"#),
            "duplicate contact 'Ann'",
        );
    }

    #[test]
    fn blank_contact_name_fails_to_load() {
        assert_refused(
            load_contacts_from(r#"[{"name": "  "}]"#),
            "name cannot be empty",
        );
    }

    #[test]
    fn repeated_phone_fails_to_load() {
        assert_refused(
            load_contacts_from(r#"[{"name": "Ann", "phones": ["1234567890", "1234567890"]}]"#),
            "phone number already exists",
        );
    }

    #[test]
    fn repeated_note_title_fails_to_load() {
        let dir = TempDir::new().unwrap();
        let note = r#"{"title": "n1", "body": "", "created_at": "2024-01-01T12:00:00Z"}"#;
        fs::write(
            dir.path().join(DEFAULT_NOTES_FILE),
            format!("[{}, {}]", note, note),
        )
        .unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_refused(store.load_notes(), "duplicate note 'n1'");
    }
}
