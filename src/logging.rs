//! Diagnostic logging setup.
//!
//! Events go to stderr so command output on stdout stays parseable.
//! `RUST_LOG` overrides the level chosen from `-v`.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "notelist=warn",
        1 => "notelist=info",
        2 => "notelist=debug",
        _ => "notelist=trace",
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbosity).into());

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
