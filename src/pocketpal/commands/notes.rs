use super::{rest, CmdMessage, CmdResult, Context};
use crate::book::ContactBook;
use crate::error::{PocketError, Result};
use crate::notebook::NoteBook;

/// `add-note [title] [body...]`: the first word names the note.
pub(crate) fn add_note(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let note = notes.add(&args[0], &rest(args, 1))?;
    let mut result = CmdResult::default().with_notes([note]);
    result.add_message(CmdMessage::success("Note added."));
    Ok(result)
}

pub(crate) fn edit_note(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let note = notes.edit(&args[0], &rest(args, 1))?;
    Ok(CmdResult::default().with_notes([note]))
}

pub(crate) fn replace_note(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let note = notes.replace(&args[0], &rest(args, 1))?;
    Ok(CmdResult::default().with_notes([note]))
}

/// Deletes the note and removes its title from the contacts that listed it.
pub(crate) fn delete_note(
    _ctx: &Context,
    args: &[String],
    book: &mut ContactBook,
    notes: &mut NoteBook,
) -> Result<CmdResult> {
    let removed = notes.delete(&args[0])?;
    for name in removed.contacts() {
        if let Some(record) = book.find_mut(name) {
            record.detach_note(removed.title());
        }
    }
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note {} deleted.",
        removed.title()
    ))))
}

pub(crate) fn show_note(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_notes([notes.get(&args[0])?]))
}

pub(crate) fn show_notes(_ctx: &Context, _args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_notes(notes.show_all());
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No notes yet."));
    }
    Ok(result)
}

pub(crate) fn show_notes_for_contact(
    _ctx: &Context,
    args: &[String],
    notes: &mut NoteBook,
) -> Result<CmdResult> {
    let found = notes.show_all_for_contact(&args[0]);
    let mut result = CmdResult::default().with_notes(found.iter().copied());
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No notes attached to {}.",
            args[0]
        )));
    }
    Ok(result)
}

/// `search-notes [query...]`: no query lists every note.
pub(crate) fn search_notes(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let query = rest(args, 0);
    let found = notes.search(&query);
    let mut result = CmdResult::default().with_notes(found.iter().copied());
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes matching '{}'.", query)));
    }
    Ok(result)
}

/// `attach-note [title] [name]`: records the link on both sides.
pub(crate) fn attach_note(
    _ctx: &Context,
    args: &[String],
    book: &mut ContactBook,
    notes: &mut NoteBook,
) -> Result<CmdResult> {
    let (title, name) = (&args[0], &args[1]);
    if notes.find(title).is_none() || book.find(name).is_none() {
        return Err(PocketError::not_found(format!(
            "contact '{}' or note '{}' not found",
            name, title
        )));
    }

    let record = book.get_mut(name)?;
    record.attach_note(title.trim());
    let contact_name = record.name().to_string();
    let note = notes.attach_to_contact(title, &contact_name)?;

    let mut result = CmdResult::default().with_notes([note]);
    result.add_message(CmdMessage::success(format!(
        "Note {} attached to contact {}.",
        note.title(),
        contact_name
    )));
    Ok(result)
}
