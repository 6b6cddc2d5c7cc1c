use super::{rest, CmdMessage, CmdResult, Context};
use crate::book::ContactBook;
use crate::error::Result;
use crate::model::Record;

/// `add [name] [phone]`: creates the contact, or adds the phone to an existing one.
pub(crate) fn add(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let (name, phone) = (&args[0], &args[1]);

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(CmdResult::message(CmdMessage::success("Contact updated.")));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(CmdResult::message(CmdMessage::success("Contact added.")))
}

pub(crate) fn change_phone(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    book.get_mut(&args[0])?.edit_phone(&args[1], &args[2])?;
    Ok(CmdResult::message(CmdMessage::success(
        "Phone number updated.",
    )))
}

pub(crate) fn remove_phone(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    book.get_mut(&args[0])?.remove_phone(&args[1])?;
    Ok(CmdResult::message(CmdMessage::success(
        "Phone number removed.",
    )))
}

pub(crate) fn show_phone(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let record = book.get(&args[0])?;
    Ok(CmdResult::message(CmdMessage::info(format!(
        "{}'s phones: {}",
        record.name(),
        record.all_phones()
    ))))
}

pub(crate) fn show_all(_ctx: &Context, _args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_contacts(book.records());
    if book.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result)
}

pub(crate) fn search(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let found = book.search_by_partial_name(&args[0]);
    let mut result = CmdResult::default().with_contacts(found.iter().copied());
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts matching '{}'.",
            args[0]
        )));
    }
    Ok(result)
}

/// Deletes the contact only; notes keep naming it and `show-notes-contact` still finds them.
pub(crate) fn remove(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let removed = book.delete(&args[0])?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Contact {} removed.",
        removed.name()
    ))))
}

pub(crate) fn add_address(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    book.get_mut(&args[0])?.add_address(&rest(args, 1));
    Ok(CmdResult::message(CmdMessage::success("Address added.")))
}

pub(crate) fn show_address(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let record = book.get(&args[0])?;
    Ok(CmdResult::message(CmdMessage::info(
        record.address_display(),
    )))
}
