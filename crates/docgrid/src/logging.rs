//! Diagnostic logging to stderr
//!
//! Pipeline stages log through `tracing`. Only warnings are shown unless
//! `--verbose` is given, which enables debug output for the docgrid crates.
//! The final `Error: ...` line is not a log record and is always printed.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "warn,docgrid=debug,docgrid_core=debug,docgrid_fetch=debug";
const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing subscriber writing to stderr
pub fn init(verbose: bool) {
    let filter = EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_filter(filter);

    // Already set when called twice in one process; keep the first
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
