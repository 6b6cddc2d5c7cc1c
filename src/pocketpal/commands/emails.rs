use super::{CmdMessage, CmdResult, Context};
use crate::book::ContactBook;
use crate::error::Result;

pub(crate) fn add_email(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let (name, email) = (&args[0], &args[1]);
    book.get_mut(name)?.add_email(email)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Email '{}' was added for contact '{}'.",
        email, name
    ))))
}

pub(crate) fn edit_email(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let (name, old, new) = (&args[0], &args[1], &args[2]);
    book.get_mut(name)?.edit_email(old, new)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Email '{}' was changed to '{}' for contact '{}'.",
        old, new, name
    ))))
}

pub(crate) fn remove_email(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let (name, email) = (&args[0], &args[1]);
    book.get_mut(name)?.remove_email(email)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Email '{}' was removed from contact '{}'.",
        email, name
    ))))
}

pub(crate) fn show_email(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let record = book.get(&args[0])?;
    let message = if record.emails().is_empty() {
        CmdMessage::info(format!("{} doesn't have any emails.", record.name()))
    } else {
        CmdMessage::info(format!("{}'s emails: {}", record.name(), record.all_emails()))
    };
    Ok(CmdResult::message(message))
}
