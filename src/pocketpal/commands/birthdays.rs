use super::{CmdMessage, CmdResult, Context};
use crate::book::ContactBook;
use crate::error::{PocketError, Result};

pub(crate) fn add_birthday(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    book.get_mut(&args[0])?.add_birthday(&args[1])?;
    Ok(CmdResult::message(CmdMessage::success("Birthday added.")))
}

pub(crate) fn show_birthday(_ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let record = book.get(&args[0])?;
    Ok(CmdResult::message(CmdMessage::info(format!(
        "{}'s birthday: {}",
        record.name(),
        record.birthday_display()
    ))))
}

/// `birthdays [days]`: the window defaults to the configured one.
pub(crate) fn upcoming(ctx: &Context, args: &[String], book: &mut ContactBook) -> Result<CmdResult> {
    let days = match args.first() {
        None => ctx.birthday_window,
        Some(days) => days.parse::<u32>().map(i64::from).map_err(|_| {
            PocketError::validation(format!("days must be a non-negative number, got '{}'", days))
        })?,
    };

    let upcoming = book.upcoming_birthdays_from(ctx.today, days);
    let mut result = CmdResult::default();
    if upcoming.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No upcoming birthdays found in next {} days.",
            days
        )));
    }
    Ok(result.with_birthdays(upcoming))
}
