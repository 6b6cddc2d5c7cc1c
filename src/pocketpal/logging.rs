//! Log output for the binary.
//!
//! The library only emits `tracing` events. Front ends call [`init_logging`]
//! once to print them on stderr, so they never mix with command output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "pocketpal=debug"
    } else {
        "warn"
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `verbose`.
///
/// A second call is a no-op, which keeps tests that run the shell in-process
/// from panicking.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
