//! # PocketPal Architecture
//!
//! PocketPal is a personal assistant for contacts, birthdays and notes. Like
//! any front end built on it, the interactive shell in `main.rs` is a thin
//! client: the library holds every rule, the binary only reads lines and
//! prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, renders results and errors          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Registry (registry.rs)        │
//! │  - Verb → handler table with argument-count contracts       │
//! │  - Hands each handler the collection(s) it targets          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per verb, returns Result<CmdResult>         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields, model, book, notebook)                     │
//! │  - Validated values, records, notes and their collections   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contacts and notes
//!
//! The two collections never own each other. Attaching a note to a contact
//! records the note's title on the contact and the contact's name on the
//! note. Deleting a contact leaves its name on the notes, so
//! `show-notes-contact` still finds them; deleting a note removes its title
//! from every contact that listed it.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code takes Rust values and returns
//! `Result<CmdResult>`. It never writes to stdout or stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides where
//! they end up (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for running commands
//! - [`registry`]: Static command table, lookup and catalog
//! - [`commands`]: Handlers, grouped by domain
//! - [`fields`]: Phone, birthday and email validation
//! - [`model`]: `Record` and `Note`
//! - [`book`]: The contact directory and upcoming birthdays
//! - [`notebook`]: The note collection
//! - [`store`]: Storage abstraction and implementations
//! - [`import`]: CSV contact import
//! - [`config`]: Configuration management
//! - [`logging`]: Subscriber setup for front ends
//! - [`error`]: Error types
//! - `cli`: The interactive shell (binary only)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod import;
pub mod logging;
pub mod model;
pub mod notebook;
pub mod registry;
pub mod store;
