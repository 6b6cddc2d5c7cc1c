use super::{CmdMessage, CmdResult, Context};
use crate::book::ContactBook;
use crate::error::Result;
use crate::import;
use crate::notebook::NoteBook;
use crate::registry;
use std::path::Path;

pub(crate) fn hello(_ctx: &Context, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info("How can I help you?")))
}

pub(crate) fn help(_ctx: &Context, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_commands(registry::catalog()))
}

pub(crate) fn exit(_ctx: &Context, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info("Good bye!")).with_exit())
}

pub(crate) fn import_csv(
    _ctx: &Context,
    args: &[String],
    book: &mut ContactBook,
    notes: &mut NoteBook,
) -> Result<CmdResult> {
    let report = import::import_contacts(Path::new(&args[0]), book, notes)?;

    let mut result = CmdResult::message(CmdMessage::success(format!(
        "Imported {} new and {} existing contacts from {}.",
        report.added, report.updated, args[0]
    )));
    if report.skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} rows skipped, see the log for details.",
            report.skipped
        )));
    }
    if report.unlinked_notes > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} note titles matched no note and were not linked.",
            report.unlinked_notes
        )));
    }
    Ok(result.with_save())
}

pub(crate) fn clear_all(
    _ctx: &Context,
    _args: &[String],
    book: &mut ContactBook,
    notes: &mut NoteBook,
) -> Result<CmdResult> {
    let (contacts, note_count) = (book.len(), notes.len());
    book.clear();
    notes.clear();
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Deleted {} contacts and {} notes.",
        contacts, note_count
    )))
    .with_save())
}
