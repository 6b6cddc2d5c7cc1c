//! The contact directory.
//!
//! Records are kept in insertion order and keyed by their trimmed name.
//! `find` returns an `Option`; handlers that need a hard miss go through
//! `get`/`get_mut`, which turn it into [`PocketError::NotFound`].

use crate::error::{PocketError, Result};
use crate::fields::BIRTHDAY_FORMAT;
use crate::model::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The birthday occurrence moved off the weekend.
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn date_display(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, congratulation date: {}",
            self.name,
            self.date_display()
        )
    }
}

/// Stored as a JSON array of records. Loading goes through
/// [`TryFrom<Vec<Record>>`], which holds a snapshot to the same rules as
/// `add`: one record per trimmed name and no repeated phone or email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Record>", into = "Vec<Record>")]
pub struct ContactBook {
    records: Vec<Record>,
}

impl TryFrom<Vec<Record>> for ContactBook {
    type Error = PocketError;

    fn try_from(records: Vec<Record>) -> Result<Self> {
        let mut book = ContactBook::new();
        for record in records {
            let record = record
                .revalidated()
                .map_err(|e| PocketError::Store(format!("invalid stored contact: {}", e)))?;
            if book.find(record.name()).is_some() {
                return Err(PocketError::Store(format!(
                    "duplicate contact '{}'",
                    record.name()
                )));
            }
            book.records.push(record);
        }
        Ok(book)
    }
}

impl From<ContactBook> for Vec<Record> {
    fn from(book: ContactBook) -> Self {
        book.records
    }
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing (in place) any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |pos| &mut self.records[pos])
    }

    pub fn get(&self, name: &str) -> Result<&Record> {
        self.find(name).ok_or_else(|| contact_not_found(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.find_mut(name).ok_or_else(|| contact_not_found(name))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let pos = self.position(name).ok_or_else(|| contact_not_found(name))?;
        Ok(self.records.remove(pos))
    }

    /// Case-insensitive substring match on names, in insertion order.
    pub fn search_by_partial_name(&self, partial: &str) -> Vec<&Record> {
        let needle = partial.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Birthdays in the next `days` days, counted from the local date.
    pub fn get_upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Birthdays occurring between `today` and `today + days` inclusive.
    ///
    /// A birthday already past this year rolls over to next year. Occurrences
    /// on a Saturday or Sunday are congratulated on the following Monday,
    /// which may land after the window end.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let mut occurrence = occurrence_in(birthday, today.year());
                if occurrence < today {
                    occurrence = occurrence_in(birthday, today.year() + 1);
                }
                if (occurrence - today).num_days() > days {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: shift_off_weekend(occurrence),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.records.iter().position(|r| r.name() == name)
    }
}

fn contact_not_found(name: &str) -> PocketError {
    PocketError::not_found(format!("contact '{}' not found", name.trim()))
}

/// The birthday's month and day in `year`; 29 February becomes 28 February
/// in common years.
fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
        .unwrap_or(birthday)
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
