//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Log level selected by the global CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Advisories only.
    Quiet,
    /// `--verbose`
    Verbose,
    /// `--debug`
    Debug,
}

impl Verbosity {
    /// Picks a level from the flags; `debug` wins over `verbose`.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        match (verbose, debug) {
            (_, true) => Verbosity::Debug,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Quiet,
        }
    }

    /// Filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Installs a stderr fmt subscriber. `RUST_LOG` overrides the flag level.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
