//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns both
//! collections and the store, and is the single entry point for running a
//! command, whatever front end drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** both collections from the store when it is created
//! - **Dispatches** a registry [`Command`] with its arguments: validates the
//!   argument count, builds the [`Context`], and hands the handler exactly the
//!   collection(s) its [`Handler`] variant asks for
//! - **Saves** snapshots when a command asks for it (`exit`, `close`,
//!   `clear-all`, `import-csv`) and when the caller says so
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O on the terminal**: No stdout or stderr
//! - **Verb parsing**: Looking a verb up is the caller's job, so an unknown
//!   verb never reaches this layer
//!
//! ## Generic Over DataStore
//!
//! `PocketApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PocketApi<FileStore>`
//! - Testing: `PocketApi<InMemoryStore>`

use crate::book::ContactBook;
use crate::commands::{CmdResult, Context};
use crate::config::PocketConfig;
use crate::error::Result;
use crate::notebook::NoteBook;
use crate::registry::{self, Command, Handler};
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::{debug, info};

pub struct PocketApi<S: DataStore> {
    store: S,
    config: PocketConfig,
    contacts: ContactBook,
    notes: NoteBook,
    /// Pinned date for deterministic runs; `None` reads the local clock.
    today: Option<NaiveDate>,
}

impl<S: DataStore> PocketApi<S> {
    /// Restores both collections from `store`.
    pub fn new(store: S, config: PocketConfig) -> Result<Self> {
        let contacts = store.load_contacts()?;
        let notes = store.load_notes()?;
        info!(
            "Loaded {} contacts and {} notes",
            contacts.len(),
            notes.len()
        );
        Ok(Self {
            store,
            config,
            contacts,
            notes,
            today: None,
        })
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn context(&self) -> Context {
        match self.today {
            Some(today) => Context::new(today, self.config.birthday_window),
            None => Context::local(self.config.birthday_window),
        }
    }

    /// Runs `command` with `args` against the collection(s) it targets.
    ///
    /// On error nothing is saved and the collections keep whatever state the
    /// handler left, which for every handler is the state before the call.
    pub fn dispatch(&mut self, command: &Command, args: &[String]) -> Result<CmdResult> {
        command.validate(args)?;
        let ctx = self.context();
        debug!(
            "Dispatching '{}' (target {}) with {} args",
            command.name,
            command.target(),
            args.len()
        );

        let result = match command.handler {
            Handler::Plain(run) => run(&ctx, args),
            Handler::Contacts(run) => run(&ctx, args, &mut self.contacts),
            Handler::Notes(run) => run(&ctx, args, &mut self.notes),
            Handler::Both(run) => run(&ctx, args, &mut self.contacts, &mut self.notes),
        }?;

        if result.wants_save() {
            self.save()?;
        }
        Ok(result)
    }

    /// Looks `verb` up and dispatches it. `None` when no command has that name.
    pub fn run(&mut self, verb: &str, args: &[String]) -> Option<Result<CmdResult>> {
        registry::lookup(verb).map(|command| self.dispatch(command, args))
    }

    /// Writes both collections to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_contacts(&self.contacts)?;
        self.store.save_notes(&self.notes)?;
        debug!(
            "Saved {} contacts and {} notes",
            self.contacts.len(),
            self.notes.len()
        );
        Ok(())
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
