//! Terminal output for command results and errors.
//!
//! `render_*` build the text so it can be tested; `print_*` write it out.

use chrono::{DateTime, Utc};
use colored::Colorize;
use pocketpal::book::UpcomingBirthday;
use pocketpal::commands::{CmdMessage, CmdResult, MessageLevel};
use pocketpal::error::PocketError;
use pocketpal::model::{Note, Record};
use pocketpal::registry::{CommandInfo, Target};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a contacts table cell may grow before it is truncated.
const MAX_CELL_WIDTH: usize = 32;
const COLUMN_GAP: &str = "  ";
const CONTACT_HEADERS: [&str; 6] = ["Name", "Phones", "Birthday", "Address", "Emails", "Notes"];

pub(super) fn print_result(result: &CmdResult) {
    if !result.commands.is_empty() {
        print!("{}", render_help(&result.commands));
    }
    if !result.contacts.is_empty() {
        print!("{}", render_contacts(&result.contacts));
    }
    if !result.notes.is_empty() {
        print!("{}", render_notes(&result.notes, Utc::now()));
    }
    if !result.birthdays.is_empty() {
        print!("{}", render_birthdays(&result.birthdays));
    }
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// The one place errors become text. Input problems go to stdout with the
/// rest of the session; storage and import failures go to stderr.
pub(super) fn print_error(error: &PocketError) {
    if error.is_user_error() {
        println!("{}", render_error(error));
    } else {
        eprintln!("{}", render_error(error));
    }
}

pub(super) fn print_invalid_command() {
    println!("{}", "Invalid command.".red());
}

pub(super) fn render_error(error: &PocketError) -> String {
    let text = error.to_string();
    match error {
        PocketError::Validation(_) | PocketError::ArgumentCount(_) => text.red().to_string(),
        PocketError::Duplicate(_) | PocketError::NotFound(_) => text.yellow().to_string(),
        _ => format!("{} {}", "Error:".red().bold(), text),
    }
}

pub(super) fn render_contacts(records: &[Record]) -> String {
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.name().to_string(),
                r.all_phones(),
                r.birthday_display(),
                r.address_display().to_string(),
                r.all_emails(),
                r.all_notes(),
            ]
            .map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH))
        })
        .collect();

    let mut widths = CONTACT_HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = CONTACT_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_to_width(h, w))
        .collect();
    out.push_str(&format!("{}\n", header.join(COLUMN_GAP).trim_end().bold()));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = pad_to_width(cell, w);
                if i == 0 {
                    padded.cyan().to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn render_notes(notes: &[Note], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            note.title().bold(),
            format!("({})", format_time_ago(note.created_at(), now)).dimmed()
        ));
        if !note.body().is_empty() {
            out.push_str(&format!("  {}\n", note.body()));
        }
        out.push_str(&format!("  Tags: {}\n", note.tags_display()));
        out.push_str(&format!("  Contacts: {}\n", note.contacts_display()));
    }
    out
}

pub(super) fn render_birthdays(birthdays: &[UpcomingBirthday]) -> String {
    birthdays.iter().map(|b| format!("{}\n", b)).collect()
}

/// Commands grouped by the collection they work on, in table order.
pub(super) fn render_help(commands: &[CommandInfo]) -> String {
    const GROUPS: [(Target, &str); 4] = [
        (Target::Contacts, "Contact Commands:"),
        (Target::Notes, "Note Commands:"),
        (Target::Both, "Contact & Note Commands:"),
        (Target::None, "Session Commands:"),
    ];
    let usage_width = commands.iter().map(|c| c.usage.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (target, heading) in GROUPS {
        let group: Vec<&CommandInfo> = commands.iter().filter(|c| c.target == target).collect();
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", heading.bold()));
        for info in group {
            out.push_str(&format!(
                "  {}  {}\n",
                pad_to_width(info.usage, usage_width).cyan(),
                info.description
            ));
        }
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    Formatter::new().convert(elapsed.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pocketpal::registry;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn contacts_table_aligns_columns() {
        plain();
        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("1234567890").unwrap();
        let mut bob = Record::new("Bob Longname").unwrap();
        bob.add_birthday("01.02.1990").unwrap();

        let table = render_contacts(&[ann, bob]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name          Phones"));
        assert!(lines[1].starts_with("Ann           1234567890"));
        assert!(lines[2].contains("01.02.1990"));
        // Phones column is aligned under its header.
        assert_eq!(lines[0].find("Phones"), lines[1].find("1234567890"));
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        plain();
        let wide = Record::new("日本語").unwrap();
        let narrow = Record::new("Ann").unwrap();
        let table = render_contacts(&[wide, narrow]);
        let lines: Vec<&str> = table.lines().collect();
        let phones_at = |line: &str| line.split("N/A").next().unwrap().width();
        assert_eq!(phones_at(lines[1]), phones_at(lines[2]));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(50);
        let cut = truncate_to_width(&long, 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn notes_show_age_tags_and_contacts() {
        plain();
        let created = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let mut note = Note::with_created_at("plan", "summer trip", created).unwrap();
        note.add_tag("travel").unwrap();
        note.attach_to_contact("Ann");

        let text = render_notes(&[note], created + Duration::hours(3));
        assert!(text.starts_with("plan (3 hours ago)\n"));
        assert!(text.contains("  summer trip\n"));
        assert!(text.contains("  Tags: travel\n"));
        assert!(text.contains("  Contacts: Ann\n"));
    }

    #[test]
    fn help_groups_by_target() {
        plain();
        let help = render_help(&registry::catalog());
        let contacts_at = help.find("Contact Commands:").unwrap();
        let session_at = help.find("Session Commands:").unwrap();
        assert!(contacts_at < session_at);
        assert!(help.contains("add [name] [phone]"));
        assert!(help.contains("attach-note [title] [name]"));
    }

    #[test]
    fn errors_keep_their_message() {
        plain();
        let err = PocketError::ArgumentCount("phone [name]".into());
        assert_eq!(
            render_error(&err),
            "Wrong args for command. Example: phone [name]"
        );
        assert_eq!(
            render_error(&PocketError::not_found("contact 'x' not found")),
            "contact 'x' not found"
        );
        assert_eq!(
            render_error(&PocketError::Store("disk full".into())),
            "Error: Store error: disk full"
        );
    }
}
