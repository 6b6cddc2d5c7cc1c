use super::print::{print_error, print_invalid_command, print_result};
use pocketpal::api::PocketApi;
use pocketpal::error::Result;
use pocketpal::store::DataStore;
use std::io::{self, BufRead, Write};

const GREETING: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";

/// Splits a line into a lower-cased verb and its arguments.
/// Returns `None` for a blank line.
pub(super) fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_lowercase();
    Some((verb, words.map(str::to_string).collect()))
}

/// Reads commands from `input` until `exit`/`close` or end of input.
///
/// Command errors are printed and the session goes on. The only errors
/// returned are failures to write the final snapshot.
pub(super) fn run_session<S, R>(api: &mut PocketApi<S>, input: R, interactive: bool) -> Result<()>
where
    S: DataStore,
    R: BufRead,
{
    println!("{}", GREETING);
    let mut lines = input.lines();

    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let Some((verb, args)) = parse_input(&line) else {
            continue;
        };
        let exiting = matches!(verb.as_str(), "exit" | "close");

        match api.run(&verb, &args) {
            None => print_invalid_command(),
            Some(Ok(result)) => {
                print_result(&result);
                if result.exit {
                    return Ok(());
                }
            }
            // The exit snapshot failed; report it as fatal.
            Some(Err(e)) if exiting && !e.is_user_error() => return Err(e),
            Some(Err(e)) => print_error(&e),
        }
    }

    // End of input behaves like `exit`.
    api.save()
}
