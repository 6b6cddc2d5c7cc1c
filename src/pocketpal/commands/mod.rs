//! # Command Layer
//!
//! One handler per verb, grouped by domain. A handler takes the already
//! validated argument list plus the collection(s) its registry entry targets,
//! and returns a [`CmdResult`] describing what happened. Handlers never print.

use crate::book::UpcomingBirthday;
use crate::model::{Note, Record};
use crate::registry::CommandInfo;
use chrono::{Local, NaiveDate};

pub(crate) mod birthdays;
pub(crate) mod contacts;
pub(crate) mod emails;
pub(crate) mod notes;
pub(crate) mod session;
pub(crate) mod tags;

/// Read-only facts a handler may need besides its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub today: NaiveDate,
    /// Days ahead `birthdays` looks when called without an argument.
    pub birthday_window: i64,
}

impl Context {
    pub fn new(today: NaiveDate, birthday_window: i64) -> Self {
        Self {
            today,
            birthday_window,
        }
    }

    pub fn local(birthday_window: i64) -> Self {
        Self::new(Local::now().date_naive(), birthday_window)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub contacts: Vec<Record>,
    pub notes: Vec<Note>,
    pub birthdays: Vec<UpcomingBirthday>,
    pub commands: Vec<CommandInfo>,
    pub messages: Vec<CmdMessage>,
    /// Set by `exit`/`close`; the shell saves and stops.
    pub exit: bool,
    /// Ask the caller to write a snapshot now, without exiting.
    pub save: bool,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_contacts<'a>(mut self, records: impl IntoIterator<Item = &'a Record>) -> Self {
        self.contacts = records.into_iter().cloned().collect();
        self
    }

    pub fn with_notes<'a>(mut self, notes: impl IntoIterator<Item = &'a Note>) -> Self {
        self.notes = notes.into_iter().cloned().collect();
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_commands(mut self, commands: Vec<CommandInfo>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn with_save(mut self) -> Self {
        self.save = true;
        self
    }

    pub fn wants_save(&self) -> bool {
        self.save || self.exit
    }
}

/// Joins the arguments from `start` on into one space-separated string.
pub(crate) fn rest(args: &[String], start: usize) -> String {
    args.get(start..).unwrap_or_default().join(" ")
}


#[cfg(test)]
mod tests {
    use super::fixtures::args;
    use super::*;

    #[test]
    fn rest_joins_trailing_words() {
        assert_eq!(rest(&args(&["t", "buy", "milk"]), 1), "buy milk");
        assert_eq!(rest(&args(&["t"]), 1), "");
        assert_eq!(rest(&args(&[]), 3), "");
    }
}
