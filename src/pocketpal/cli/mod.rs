//! # CLI Layer
//!
//! This module is **one possible UI client** for pocketpal: an interactive
//! session that reads one command per line.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Decides the data directory and installs the log subscriber
//! - Turns errors into colored text
//!
//! ## Structure
//!
//! - `run()`: Parses flags, builds the API, runs the session (called by `main.rs`)
//! - `setup`: clap definition of the process flags
//! - `repl`: Line parsing and the read loop
//! - `print`: Rendering of results and errors

mod print;
mod repl;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use pocketpal::api::PocketApi;
use pocketpal::config::PocketConfig;
use pocketpal::error::{PocketError, Result};
use pocketpal::logging::init_logging;
use pocketpal::store::fs::FileStore;
use setup::Cli;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    repl::run_session(&mut api, stdin.lock(), interactive)
}

fn init_api(cli: &Cli) -> Result<PocketApi<FileStore>> {
    let home = match &cli.home {
        Some(home) => home.clone(),
        None => default_data_dir()?,
    };
    debug!("Using data directory {}", home.display());

    let config = PocketConfig::load(&home)?;
    let store = FileStore::new(home).with_files(&config.contacts_file, &config.notes_file);
    PocketApi::new(store, config)
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "pocketpal", "pocketpal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PocketError::Store("could not determine a data directory".to_string()))
}
