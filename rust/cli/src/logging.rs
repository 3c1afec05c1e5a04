//! Diagnostic logging for the `vegas` binary.
//!
//! Engine and CLI events go to stderr through a `tracing-subscriber` fmt
//! layer. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn,vegas_engine=warn,vegas_cli=info";
pub const VERBOSE_FILTER: &str = "info,vegas_engine=debug,vegas_cli=debug";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Install the global subscriber. Later calls are no-ops, so `run` can be
/// invoked repeatedly from tests.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
