//! # CSV Contact Import
//!
//! Reads contacts from a CSV file with this header:
//!
//! ```csv
//! Name,Phones,Birthday,Address,Emails,Notes
//! Ann,0501234567;0671234567,12.06.1990,"Kyiv, Khreshchatyk 1",ann@mail.com,
//! ```
//!
//! `Phones`, `Emails` and `Notes` hold several values separated by `;`.
//! Empty cells are skipped and missing trailing columns read as empty.
//!
//! Every row is validated as a whole before it touches the book: a row with
//! any bad field is logged, counted in [`ImportReport::skipped`] and left out.
//! A row naming an existing contact merges into it (see [`Record::merge`]).
//!
//! A `Notes` title links the contact and the note on both sides, as
//! `attach-note` does. Titles with no matching note are logged and counted in
//! [`ImportReport::unlinked_notes`].

use crate::book::ContactBook;
use crate::error::{PocketError, Result};
use crate::model::Record;
use crate::notebook::NoteBook;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

const MULTI_VALUE_SEPARATOR: char = ';';

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ContactRow {
    name: String,
    #[serde(default)]
    phones: String,
    #[serde(default)]
    birthday: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    emails: String,
    #[serde(default)]
    notes: String,
}

impl ContactRow {
    /// The validated record plus the note titles it names.
    fn into_record(self) -> Result<(Record, Vec<String>)> {
        let mut record = Record::new(&self.name)?;
        for phone in split_multi(&self.phones) {
            record.add_phone(phone)?;
        }
        if !self.birthday.is_empty() {
            record.add_birthday(&self.birthday)?;
        }
        if !self.address.is_empty() {
            record.add_address(&self.address);
        }
        for email in split_multi(&self.emails) {
            record.add_email(email)?;
        }
        let titles = split_multi(&self.notes).map(str::to_string).collect();
        Ok((record, titles))
    }
}

fn split_multi(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// What an import did to the book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    /// Titles in the `Notes` column that named no existing note.
    pub unlinked_notes: usize,
}

/// Imports every valid row of the CSV file at `path` into `book`, linking
/// the listed notes in `notes` to the imported contacts.
///
/// Fails only when the file cannot be opened or its header cannot be read.
pub fn import_contacts(
    path: &Path,
    book: &mut ContactBook,
    notes: &mut NoteBook,
) -> Result<ImportReport> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;
    let mut report = ImportReport::default();

    for (index, row) in reader.deserialize::<ContactRow>().enumerate() {
        // Line 1 is the header.
        let line = index + 2;
        let (mut record, titles) = match row
            .map_err(PocketError::from)
            .and_then(ContactRow::into_record)
        {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Skipping CSV line {} in {}: {}", line, path.display(), e);
                report.skipped += 1;
                continue;
            }
        };

        for title in titles {
            match notes.find_mut(&title) {
                Some(note) => {
                    note.attach_to_contact(record.name());
                    record.attach_note(note.title());
                }
                None => {
                    warn!(
                        "CSV line {} in {}: note '{}' not found, not linked to {}",
                        line,
                        path.display(),
                        title,
                        record.name()
                    );
                    report.unlinked_notes += 1;
                }
            }
        }

        match book.find_mut(record.name()) {
            Some(existing) => {
                existing.merge(record);
                report.updated += 1;
            }
            None => {
                book.add_record(record);
                report.added += 1;
            }
        }
    }

    info!(
        "Imported {} new, {} updated, {} skipped from {}",
        report.added,
        report.updated,
        report.skipped,
        path.display()
    );
    Ok(report)
}
