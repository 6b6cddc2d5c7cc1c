use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn pocketpal(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pocketpal").unwrap();
    cmd.env("POCKETPAL_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_greets_and_says_goodbye() {
    let temp_dir = tempfile::tempdir().unwrap();

    pocketpal(temp_dir.path())
        .write_stdin("hello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_contacts_persist_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    pocketpal(temp_dir.path())
        .write_stdin("add John 1234567890\nadd-birthday John 15.06.1990\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Birthday added."));

    assert!(temp_dir.path().join("contacts.json").exists());
    assert!(temp_dir.path().join("notes.json").exists());

    pocketpal(temp_dir.path())
        .write_stdin("phone John\nshow-birthday john\nshow-birthday John\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("John's phones: 1234567890"))
        .stdout(predicate::str::contains("contact 'john' not found"))
        .stdout(predicate::str::contains("John's birthday: 15.06.1990"));
}

#[test]
fn test_end_of_input_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    pocketpal(temp_dir.path())
        .write_stdin("add-note groceries milk and bread\n")
        .assert()
        .success();

    let notes = fs::read_to_string(temp_dir.path().join("notes.json")).unwrap();
    assert!(notes.contains("groceries"));
    assert!(notes.contains("milk and bread"));
}

#[test]
fn test_user_errors_do_not_end_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    pocketpal(temp_dir.path())
        .write_stdin("frobnicate\nadd John\nadd John 12\nADD John 1234567890\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains(
            "Wrong args for command. Example: add [name] [phone]",
        ))
        .stdout(predicate::str::contains("phone must be 10 digits"))
        .stdout(predicate::str::contains("Contact added."));
}

#[test]
fn test_notes_attach_and_search() {
    let temp_dir = tempfile::tempdir().unwrap();

    pocketpal(temp_dir.path())
        .write_stdin(
            "add Ann 1234567890\n\
             add-note plan summer trip\n\
             add-tag plan travel\n\
             attach-note plan Ann\n\
             search-notes travel\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Note plan attached to contact Ann."))
        .stdout(predicate::str::contains("Tags: travel"))
        .stdout(predicate::str::contains("Contacts: Ann"));
}

#[test]
fn test_help_lists_commands() {
    let temp_dir = tempfile::tempdir().unwrap();

    pocketpal(temp_dir.path())
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Commands:"))
        .stdout(predicate::str::contains("add-birthday [name] [DD.MM.YYYY]"))
        .stdout(predicate::str::contains("sort-by-tag [tag]"));
}

#[test]
fn test_import_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("people.csv");
    fs::write(
        &csv_path,
        "Name,Phones,Birthday,Address,Emails,Notes\n\
         Ann,1234567890,,,ann@mail.com,\n\
         Bad,12,,,,\n",
    )
    .unwrap();

    let input = format!("import-csv {}\nall\nexit\n", csv_path.display());
    pocketpal(temp_dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 new and 0 existing contacts"))
        .stdout(predicate::str::contains("1 rows skipped"))
        .stdout(predicate::str::contains("ann@mail.com"));
}

#[test]
fn test_corrupt_snapshot_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("contacts.json"), "not json").unwrap();

    pocketpal(temp_dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_config_changes_birthday_window() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"birthday_window": 0}"#,
    )
    .unwrap();

    pocketpal(temp_dir.path())
        .write_stdin("birthdays\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No upcoming birthdays found in next 0 days.",
        ));
}
