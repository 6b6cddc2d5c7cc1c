use super::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::notebook::NoteBook;

pub(crate) fn add_tag(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let (title, tag) = (&args[0], &args[1]);
    let note = notes.add_tag(title, tag)?;
    let mut result = CmdResult::default().with_notes([note]);
    result.add_message(CmdMessage::success(format!(
        "Tag '{}' added to note {}.",
        tag,
        note.title()
    )));
    Ok(result)
}

pub(crate) fn remove_tag(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let (title, tag) = (&args[0], &args[1]);
    let note = notes.remove_tag(title, tag)?;
    let mut result = CmdResult::default().with_notes([note]);
    result.add_message(CmdMessage::success(format!(
        "Tag '{}' removed from note {}.",
        tag,
        note.title()
    )));
    Ok(result)
}

pub(crate) fn find_by_tag(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let found = notes.find_by_tag(&args[0])?;
    Ok(CmdResult::default().with_notes(found))
}

/// Tagged notes first, then the rest.
pub(crate) fn sort_by_tag(_ctx: &Context, args: &[String], notes: &mut NoteBook) -> Result<CmdResult> {
    let sorted = notes.sort_by_tag(&args[0])?;
    Ok(CmdResult::default().with_notes(sorted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{args, ctx};
    use crate::error::PocketError;

    fn notebook() -> NoteBook {
        let mut notes = NoteBook::new();
        notes.add("a", "first").unwrap();
        notes.add("b", "second").unwrap();
        notes
    }

    #[test]
    fn tag_then_find() {
        let mut notes = notebook();
        add_tag(&ctx(), &args(&["b", "work"]), &mut notes).unwrap();

        let found = find_by_tag(&ctx(), &args(&["work"]), &mut notes).unwrap();
        assert_eq!(found.notes.len(), 1);
        assert_eq!(found.notes[0].title(), "b");

        let sorted = sort_by_tag(&ctx(), &args(&["work"]), &mut notes).unwrap();
        let titles: Vec<&str> = sorted.notes.iter().map(|n| n.title()).collect();
        assert_eq!(titles, ["b", "a"]);
    }

    #[test]
    fn unknown_tag_is_not_found() {
        let mut notes = notebook();
        assert!(matches!(
            find_by_tag(&ctx(), &args(&["none"]), &mut notes),
            Err(PocketError::NotFound(_))
        ));
        assert!(matches!(
            sort_by_tag(&ctx(), &args(&["none"]), &mut notes),
            Err(PocketError::NotFound(_))
        ));
        assert!(matches!(
            remove_tag(&ctx(), &args(&["a", "none"]), &mut notes),
            Err(PocketError::NotFound(_))
        ));
    }

    #[test]
    fn long_tag_rejected() {
        let mut notes = notebook();
        let err = add_tag(
            &ctx(),
            &args(&["a", "this-tag-is-way-too-long"]),
            &mut notes,
        )
        .unwrap_err();
        assert!(matches!(err, PocketError::Validation(_)));
        assert!(notes.find("a").unwrap().tags().is_empty());
    }

    #[test]
    fn remove_tag_takes_one_occurrence() {
        let mut notes = notebook();
        add_tag(&ctx(), &args(&["a", "x"]), &mut notes).unwrap();
        add_tag(&ctx(), &args(&["a", "x"]), &mut notes).unwrap();
        let result = remove_tag(&ctx(), &args(&["a", "x"]), &mut notes).unwrap();
        assert_eq!(result.notes[0].tags(), ["x".to_string()]);
    }
}
