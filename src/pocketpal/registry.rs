//! # Command Registry
//!
//! A static table mapping each verb to its handler, argument-count contract,
//! usage string and description. The table is the single source for dispatch,
//! for `help`, and for any completion a shell wants to offer.
//!
//! ## Targets
//!
//! A handler's signature says which collections it touches. [`Handler`] has
//! one variant per target, so the [`Target`] of a command is read off its
//! handler and can never disagree with what the handler actually borrows.
//!
//! ## Argument counts
//!
//! [`ArgCount::validate`] runs before the handler. Handlers are crate-private
//! and only reached through [`PocketApi::dispatch`](crate::api::PocketApi::dispatch),
//! so a handler may index as many arguments as its contract guarantees.

use crate::book::ContactBook;
use crate::commands::{birthdays, contacts, emails, notes, session, tags, CmdResult, Context};
use crate::error::{PocketError, Result};
use crate::notebook::NoteBook;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

pub type PlainFn = fn(&Context, &[String]) -> Result<CmdResult>;
pub type ContactsFn = fn(&Context, &[String], &mut ContactBook) -> Result<CmdResult>;
pub type NotesFn = fn(&Context, &[String], &mut NoteBook) -> Result<CmdResult>;
pub type BothFn = fn(&Context, &[String], &mut ContactBook, &mut NoteBook) -> Result<CmdResult>;

#[derive(Clone, Copy)]
pub enum Handler {
    Plain(PlainFn),
    Contacts(ContactsFn),
    Notes(NotesFn),
    Both(BothFn),
}

impl Handler {
    pub fn target(&self) -> Target {
        match self {
            Handler::Plain(_) => Target::None,
            Handler::Contacts(_) => Target::Contacts,
            Handler::Notes(_) => Target::Notes,
            Handler::Both(_) => Target::Both,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::{:?}", self.target())
    }
}

/// Which collection(s) a command reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    None,
    Contacts,
    Notes,
    Both,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Target::None => "none",
            Target::Contacts => "contacts",
            Target::Notes => "notes",
            Target::Both => "both",
        };
        f.write_str(label)
    }
}

/// How many arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCount {
    Exact(usize),
    /// At least `n`; the trailing words are usually joined into free text.
    AtLeast(usize),
    /// Up to `n`, for optional arguments.
    AtMost(usize),
    Any,
}

impl ArgCount {
    pub fn validate(self, args: &[String], usage: &str) -> Result<()> {
        let ok = match self {
            ArgCount::Any => true,
            ArgCount::Exact(n) => args.len() == n,
            ArgCount::AtLeast(n) => args.len() >= n,
            ArgCount::AtMost(n) => args.len() <= n,
        };
        if ok {
            Ok(())
        } else {
            Err(PocketError::ArgumentCount(usage.to_string()))
        }
    }
}

#[derive(Debug)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: ArgCount,
    pub(crate) handler: Handler,
}

impl Command {
    pub fn validate(&self, args: &[String]) -> Result<()> {
        self.args.validate(args, self.usage)
    }

    pub fn target(&self) -> Target {
        self.handler.target()
    }

    pub fn info(&self) -> CommandInfo {
        CommandInfo {
            name: self.name,
            description: self.description,
            usage: self.usage,
            target: self.target(),
        }
    }
}

/// A catalog entry, for help screens and completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub target: Target,
}

pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        description: "Greets the user.",
        usage: "hello",
        args: ArgCount::Exact(0),
        handler: Handler::Plain(session::hello),
    },
    Command {
        name: "help",
        description: "Lists every command with its usage.",
        usage: "help",
        args: ArgCount::Exact(0),
        handler: Handler::Plain(session::help),
    },
    Command {
        name: "menu",
        description: "Same as help.",
        usage: "menu",
        args: ArgCount::Exact(0),
        handler: Handler::Plain(session::help),
    },
    Command {
        name: "add",
        description: "Adds a contact, or another phone to an existing contact.",
        usage: "add [name] [phone]",
        args: ArgCount::Exact(2),
        handler: Handler::Contacts(contacts::add),
    },
    Command {
        name: "change",
        description: "Replaces one of a contact's phones.",
        usage: "change [name] [old phone] [new phone]",
        args: ArgCount::Exact(3),
        handler: Handler::Contacts(contacts::change_phone),
    },
    Command {
        name: "remove-phone",
        description: "Removes a phone from a contact.",
        usage: "remove-phone [name] [phone]",
        args: ArgCount::Exact(2),
        handler: Handler::Contacts(contacts::remove_phone),
    },
    Command {
        name: "phone",
        description: "Shows a contact's phones.",
        usage: "phone [name]",
        args: ArgCount::Exact(1),
        handler: Handler::Contacts(contacts::show_phone),
    },
    Command {
        name: "all",
        description: "Shows every contact.",
        usage: "all",
        args: ArgCount::Exact(0),
        handler: Handler::Contacts(contacts::show_all),
    },
    Command {
        name: "search",
        description: "Finds contacts whose name contains the text.",
        usage: "search [partial name]",
        args: ArgCount::Exact(1),
        handler: Handler::Contacts(contacts::search),
    },
    Command {
        name: "remove",
        description: "Deletes a contact. Notes attached to it are kept.",
        usage: "remove [name]",
        args: ArgCount::Exact(1),
        handler: Handler::Contacts(contacts::remove),
    },
    Command {
        name: "add-address",
        description: "Sets a contact's address.",
        usage: "add-address [name] [address]",
        args: ArgCount::AtLeast(2),
        handler: Handler::Contacts(contacts::add_address),
    },
    Command {
        name: "show-address",
        description: "Shows a contact's address.",
        usage: "show-address [name]",
        args: ArgCount::Exact(1),
        handler: Handler::Contacts(contacts::show_address),
    },
    Command {
        name: "add-birthday",
        description: "Sets a contact's birthday.",
        usage: "add-birthday [name] [DD.MM.YYYY]",
        args: ArgCount::Exact(2),
        handler: Handler::Contacts(birthdays::add_birthday),
    },
    Command {
        name: "show-birthday",
        description: "Shows a contact's birthday.",
        usage: "show-birthday [name]",
        args: ArgCount::Exact(1),
        handler: Handler::Contacts(birthdays::show_birthday),
    },
    Command {
        name: "birthdays",
        description: "Lists birthdays coming up in the next days (weekends move to Monday).",
        usage: "birthdays [days]",
        args: ArgCount::AtMost(1),
        handler: Handler::Contacts(birthdays::upcoming),
    },
    Command {
        name: "add-email",
        description: "Adds an email to a contact.",
        usage: "add-email [name] [email]",
        args: ArgCount::Exact(2),
        handler: Handler::Contacts(emails::add_email),
    },
    Command {
        name: "edit-email",
        description: "Replaces one of a contact's emails.",
        usage: "edit-email [name] [old email] [new email]",
        args: ArgCount::Exact(3),
        handler: Handler::Contacts(emails::edit_email),
    },
    Command {
        name: "remove-email",
        description: "Removes an email from a contact.",
        usage: "remove-email [name] [email]",
        args: ArgCount::Exact(2),
        handler: Handler::Contacts(emails::remove_email),
    },
    Command {
        name: "show-email",
        description: "Shows a contact's emails.",
        usage: "show-email [name]",
        args: ArgCount::Exact(1),
        handler: Handler::Contacts(emails::show_email),
    },
    Command {
        name: "add-note",
        description: "Creates a note. The first word is the title, the rest is the body.",
        usage: "add-note [title] [body...]",
        args: ArgCount::AtLeast(2),
        handler: Handler::Notes(notes::add_note),
    },
    Command {
        name: "edit-note",
        description: "Appends text to a note's body.",
        usage: "edit-note [title] [text...]",
        args: ArgCount::AtLeast(2),
        handler: Handler::Notes(notes::edit_note),
    },
    Command {
        name: "replace-note",
        description: "Replaces a note's body.",
        usage: "replace-note [title] [text...]",
        args: ArgCount::AtLeast(2),
        handler: Handler::Notes(notes::replace_note),
    },
    Command {
        name: "delete-note",
        description: "Deletes a note and drops it from its contacts.",
        usage: "delete-note [title]",
        args: ArgCount::Exact(1),
        handler: Handler::Both(notes::delete_note),
    },
    Command {
        name: "show-note",
        description: "Shows one note.",
        usage: "show-note [title]",
        args: ArgCount::Exact(1),
        handler: Handler::Notes(notes::show_note),
    },
    Command {
        name: "show-notes",
        description: "Shows every note.",
        usage: "show-notes",
        args: ArgCount::Exact(0),
        handler: Handler::Notes(notes::show_notes),
    },
    Command {
        name: "show-notes-contact",
        description: "Shows the notes attached to a contact.",
        usage: "show-notes-contact [name]",
        args: ArgCount::Exact(1),
        handler: Handler::Notes(notes::show_notes_for_contact),
    },
    Command {
        name: "search-notes",
        description: "Finds notes by title, body, tag or contact.",
        usage: "search-notes [query...]",
        args: ArgCount::Any,
        handler: Handler::Notes(notes::search_notes),
    },
    Command {
        name: "attach-note",
        description: "Links a note and a contact.",
        usage: "attach-note [title] [name]",
        args: ArgCount::Exact(2),
        handler: Handler::Both(notes::attach_note),
    },
    Command {
        name: "add-tag",
        description: "Tags a note.",
        usage: "add-tag [title] [tag]",
        args: ArgCount::Exact(2),
        handler: Handler::Notes(tags::add_tag),
    },
    Command {
        name: "remove-tag",
        description: "Removes a tag from a note.",
        usage: "remove-tag [title] [tag]",
        args: ArgCount::Exact(2),
        handler: Handler::Notes(tags::remove_tag),
    },
    Command {
        name: "find-by-tag",
        description: "Shows the notes carrying a tag.",
        usage: "find-by-tag [tag]",
        args: ArgCount::Exact(1),
        handler: Handler::Notes(tags::find_by_tag),
    },
    Command {
        name: "sort-by-tag",
        description: "Shows tagged notes first, then the rest, oldest first.",
        usage: "sort-by-tag [tag]",
        args: ArgCount::Exact(1),
        handler: Handler::Notes(tags::sort_by_tag),
    },
    Command {
        name: "import-csv",
        description: "Imports contacts from a CSV file.",
        usage: "import-csv [path]",
        args: ArgCount::Exact(1),
        handler: Handler::Both(session::import_csv),
    },
    Command {
        name: "clear-all",
        description: "Deletes every contact and note.",
        usage: "clear-all",
        args: ArgCount::Exact(0),
        handler: Handler::Both(session::clear_all),
    },
    Command {
        name: "exit",
        description: "Saves and exits.",
        usage: "exit",
        args: ArgCount::Exact(0),
        handler: Handler::Plain(session::exit),
    },
    Command {
        name: "close",
        description: "Same as exit.",
        usage: "close",
        args: ArgCount::Exact(0),
        handler: Handler::Plain(session::exit),
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static Command>> =
    Lazy::new(|| COMMANDS.iter().map(|c| (c.name, c)).collect());

pub fn lookup(verb: &str) -> Option<&'static Command> {
    BY_NAME.get(verb).copied()
}

/// Every command, in table order.
pub fn catalog() -> Vec<CommandInfo> {
    COMMANDS.iter().map(Command::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn verbs_are_unique() {
        let unique: HashSet<_> = COMMANDS.iter().map(|c| c.name).collect();
        assert_eq!(unique.len(), COMMANDS.len());
    }

    #[test]
    fn exact_count() {
        let usage = "add [name] [phone]";
        assert!(ArgCount::Exact(2)
            .validate(&args(&["a", "b"]), usage)
            .is_ok());
        let err = ArgCount::Exact(2)
            .validate(&args(&["a"]), usage)
            .unwrap_err();
        assert!(matches!(err, PocketError::ArgumentCount(ref u) if u == usage));
        assert!(ArgCount::Exact(2)
            .validate(&args(&["a", "b", "c"]), usage)
            .is_err());
    }

    #[test]
    fn zero_means_no_arguments() {
        assert!(ArgCount::Exact(0).validate(&[], "exit").is_ok());
        assert!(ArgCount::Exact(0).validate(&args(&["now"]), "exit").is_err());
    }

    #[test]
    fn any_always_succeeds() {
        assert!(ArgCount::Any.validate(&[], "x").is_ok());
        assert!(ArgCount::Any.validate(&args(&["1", "2", "3"]), "x").is_ok());
    }

    #[test]
    fn at_least() {
        assert!(ArgCount::AtLeast(2).validate(&args(&["t"]), "x").is_err());
        assert!(ArgCount::AtLeast(2)
            .validate(&args(&["t", "a", "b"]), "x")
            .is_ok());
    }

    #[test]
    fn at_most() {
        assert!(ArgCount::AtMost(1).validate(&[], "x").is_ok());
        assert!(ArgCount::AtMost(1).validate(&args(&["7"]), "x").is_ok());
        let err = ArgCount::AtMost(1)
            .validate(&args(&["7", "8"]), "birthdays [days]")
            .unwrap_err();
        assert!(matches!(err, PocketError::ArgumentCount(ref u) if u == "birthdays [days]"));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup("add").unwrap().usage, "add [name] [phone]");
        assert!(lookup("ADD").is_none());
        assert!(lookup("unknown").is_none());
    }

    #[test]
    fn targets_follow_handlers() {
        assert_eq!(lookup("import-csv").unwrap().target(), Target::Both);
        assert_eq!(lookup("hello").unwrap().target(), Target::None);
        assert_eq!(lookup("exit").unwrap().target(), Target::None);
        assert_eq!(lookup("add").unwrap().target(), Target::Contacts);
        assert_eq!(lookup("add-tag").unwrap().target(), Target::Notes);
        assert_eq!(lookup("attach-note").unwrap().target(), Target::Both);
    }

    #[test]
    fn catalog_lists_every_command_in_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), COMMANDS.len());
        assert_eq!(catalog[0].name, "hello");
        assert!(catalog
            .iter()
            .all(|c| !c.description.is_empty() && c.usage.starts_with(c.name)));
    }
}
