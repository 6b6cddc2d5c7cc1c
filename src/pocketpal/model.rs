use crate::error::{PocketError, Result};
use crate::fields::{Birthday, Email, Phone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const NOT_AVAILABLE: &str = "N/A";
pub const MAX_TAG_LEN: usize = 20;

fn join_or_na<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

/// Everything stored about one person.
///
/// `notes` holds note titles only; the note itself lives in the
/// [`NoteBook`](crate::notebook::NoteBook) and may have been deleted since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default)]
    notes: Vec<String>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PocketError::validation("name cannot be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            phones: Vec::new(),
            birthday: None,
            address: None,
            emails: Vec::new(),
            notes: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        let phone = Phone::parse(phone)?;
        if self.phones.contains(&phone) {
            return Err(PocketError::duplicate("phone number already exists"));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| PocketError::not_found("phone number to remove is not found"))?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replaces `old` with `new`, keeping its position in the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let old = Phone::parse(old)?;
        let new = Phone::parse(new)?;
        let pos = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| PocketError::not_found("phone number to update not found"))?;
        if old != new && self.phones.contains(&new) {
            return Err(PocketError::duplicate("phone number already exists"));
        }
        self.phones[pos] = new;
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Sets the birthday; the latest write wins.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    pub fn add_address(&mut self, address: &str) {
        self.address = Some(address.to_string());
    }

    pub fn add_email(&mut self, email: &str) -> Result<()> {
        let email = Email::parse(email)?;
        if self.emails.contains(&email) {
            return Err(PocketError::duplicate(format!(
                "email '{}' already exists for this contact",
                email
            )));
        }
        self.emails.push(email);
        Ok(())
    }

    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<()> {
        if self.emails.is_empty() {
            return Err(PocketError::not_found("no emails to edit"));
        }
        let old_email = Email::parse(old)?;
        let new_email = Email::parse(new)?;
        let pos = self
            .emails
            .iter()
            .position(|e| *e == old_email)
            .ok_or_else(|| {
                PocketError::not_found(format!("email '{}' doesn't exist for this contact", old))
            })?;
        if old_email != new_email && self.emails.contains(&new_email) {
            return Err(PocketError::duplicate(format!(
                "email '{}' already exists for this contact",
                new
            )));
        }
        self.emails[pos] = new_email;
        Ok(())
    }

    pub fn remove_email(&mut self, email: &str) -> Result<()> {
        if self.emails.is_empty() {
            return Err(PocketError::not_found("no emails to remove"));
        }
        let pos = self
            .emails
            .iter()
            .position(|e| e.as_str() == email)
            .ok_or_else(|| {
                PocketError::not_found(format!("email '{}' doesn't exist for this contact", email))
            })?;
        self.emails.remove(pos);
        Ok(())
    }

    /// Records a back-reference to a note title. Attaching twice is a no-op.
    pub fn attach_note(&mut self, title: &str) {
        if !self.notes.iter().any(|t| t == title) {
            self.notes.push(title.to_string());
        }
    }

    pub fn detach_note(&mut self, title: &str) {
        self.notes.retain(|t| t != title);
    }

    /// Folds `other` into this record: new phones, emails and note titles are
    /// appended, a present birthday or address overwrites.
    pub fn merge(&mut self, other: Record) {
        for phone in other.phones {
            if !self.phones.contains(&phone) {
                self.phones.push(phone);
            }
        }
        for email in other.emails {
            if !self.emails.contains(&email) {
                self.emails.push(email);
            }
        }
        for title in &other.notes {
            self.attach_note(title);
        }
        if other.birthday.is_some() {
            self.birthday = other.birthday;
        }
        if other.address.is_some() {
            self.address = other.address;
        }
    }

    /// Rebuilds a deserialized record through the checked setters, so a blank
    /// name or a repeated phone or email is refused.
    pub(crate) fn revalidated(self) -> Result<Record> {
        let mut record = Record::new(&self.name)?;
        for phone in &self.phones {
            record.add_phone(phone.as_str())?;
        }
        for email in &self.emails {
            record.add_email(email.as_str())?;
        }
        for title in &self.notes {
            record.attach_note(title);
        }
        record.birthday = self.birthday;
        record.address = self.address;
        Ok(record)
    }

    pub fn all_phones(&self) -> String {
        join_or_na(self.phones.iter().map(Phone::as_str))
    }

    pub fn all_emails(&self) -> String {
        join_or_na(self.emails.iter().map(Email::as_str))
    }

    pub fn all_notes(&self) -> String {
        join_or_na(&self.notes)
    }

    pub fn birthday_display(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn address_display(&self) -> &str {
        self.address.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// A titled free-text note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    body: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    contacts: BTreeSet<String>,
    created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: &str, body: &str) -> Result<Self> {
        Self::with_created_at(title, body, Utc::now())
    }

    pub fn with_created_at(title: &str, body: &str, created_at: DateTime<Utc>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PocketError::validation("note title cannot be empty"));
        }
        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
            tags: Vec::new(),
            contacts: BTreeSet::new(),
            created_at,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contacts(&self) -> &BTreeSet<String> {
        &self.contacts
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends to the body, separated by a space.
    pub fn edit(&mut self, text: &str) {
        self.body.push(' ');
        self.body.push_str(text);
    }

    pub fn replace(&mut self, text: &str) {
        self.body = text.to_string();
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<()> {
        let len = tag.chars().count();
        if len == 0 || len > MAX_TAG_LEN {
            return Err(PocketError::validation(format!(
                "tag must be between 1 and {} characters",
                MAX_TAG_LEN
            )));
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<()> {
        let pos = self.tags.iter().position(|t| t == tag).ok_or_else(|| {
            PocketError::not_found(format!("tag '{}' not found on note '{}'", tag, self.title))
        })?;
        self.tags.remove(pos);
        Ok(())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn attach_to_contact(&mut self, name: &str) {
        self.contacts.insert(name.to_string());
    }

    pub fn detach_from_contact(&mut self, name: &str) -> bool {
        self.contacts.remove(name)
    }

    pub fn is_attached_to(&self, name: &str) -> bool {
        self.contacts.contains(name)
    }

    /// Same as [`Record::revalidated`]: a blank title or an over-long tag is refused.
    pub(crate) fn revalidated(self) -> Result<Note> {
        let mut note = Note::with_created_at(&self.title, &self.body, self.created_at)?;
        for tag in &self.tags {
            note.add_tag(tag)?;
        }
        note.contacts = self.contacts;
        Ok(note)
    }

    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            "No tags".to_string()
        } else {
            self.tags.join(", ")
        }
    }

    pub fn contacts_display(&self) -> String {
        if self.contacts.is_empty() {
            "No contacts".to_string()
        } else {
            self.contacts.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}
