use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("POCKETPAL_GIT_HASH");
    const COMMIT_DATE: &str = env!("POCKETPAL_COMMIT_DATE");
    const IS_RELEASE: &str = env!("POCKETPAL_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pocketpal", bin_name = "pocketpal", version = get_version())]
#[command(
    about = "Personal assistant for contacts, birthdays and notes",
    long_about = "Starts an interactive session. Type commands one per line; \
                  `help` lists them, `exit` saves and quits."
)]
pub struct Cli {
    /// Data directory holding contacts.json, notes.json and config.json
    #[arg(long, env = "POCKETPAL_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}
