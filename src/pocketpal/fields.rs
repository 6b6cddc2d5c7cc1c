//! Validated contact fields.
//!
//! Each field type can only be built through `parse`, so a value that exists
//! is always valid. The persisted form is the display string, and
//! deserialization goes back through `parse` (`try_from = "String"`), which
//! means a hand-edited data file cannot smuggle in a malformed phone.

use crate::error::{PocketError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// A phone number of exactly ten digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self> {
        if !PHONE_RE.is_match(value) {
            return Err(PocketError::validation("phone must be 10 digits"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = PocketError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birthday, entered and shown as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        // chrono accepts single-digit days and months; the stored text must round-trip.
        if !BIRTHDAY_RE.is_match(value) {
            return Err(invalid_date());
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid_date())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn invalid_date() -> PocketError {
    PocketError::validation("invalid date format, expected DD.MM.YYYY")
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = PocketError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self> {
        if !EMAIL_RE.is_match(value) {
            return Err(PocketError::validation(format!("invalid email '{}'", value)));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = PocketError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_ten_digits() {
        for value in ["0000000000", "1234567890", "9876543210"] {
            assert_eq!(Phone::parse(value).unwrap().as_str(), value);
        }
    }

    #[test]
    fn phone_rejects_everything_else() {
        for value in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "123 456 7890",
            "+123456789",
            " 1234567890",
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            let err = Phone::parse(value).unwrap_err();
            assert!(matches!(err, PocketError::Validation(_)), "{value:?}");
            assert_eq!(err.to_string(), "phone must be 10 digits");
        }
    }

    #[test]
    fn birthday_round_trips_its_text() {
        for value in ["01.01.2000", "29.02.2024", "31.12.1999", "05.07.1987"] {
            assert_eq!(Birthday::parse(value).unwrap().to_string(), value);
        }
    }

    #[test]
    fn birthday_rejects_other_formats() {
        for value in [
            "2000-01-01",
            "1.1.2000",
            "01/01/2000",
            "32.01.2000",
            "29.02.2023",
            "01.13.2000",
            "01.01.20000",
            "",
        ] {
            let err = Birthday::parse(value).unwrap_err();
            assert_eq!(
                err.to_string(),
                "invalid date format, expected DD.MM.YYYY",
                "{value:?}"
            );
        }
    }

    #[test]
    fn email_validation() {
        assert!(Email::parse("jane.doe+work@mail.example.com").is_ok());
        assert!(Email::parse("a_b%c@d-e.io").is_ok());

        for value in ["plain", "no-at.example.com", "a@b", "a@b.c", "a b@c.com", "@x.com"] {
            assert!(
                matches!(Email::parse(value), Err(PocketError::Validation(_))),
                "{value:?}"
            );
        }
    }

    #[test]
    fn fields_deserialize_through_validation() {
        let phone: Phone = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert!(serde_json::from_str::<Phone>("\"12\"").is_err());

        let birthday: Birthday = serde_json::from_str("\"15.03.1990\"").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"15.03.1990\"");
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }
}
