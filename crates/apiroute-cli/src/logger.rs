//! Logging setup for the apiroute CLI.
//!
//! The level is picked in this order:
//! 1. `--verbose`: DEBUG for apiroute crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. INFO for apiroute crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "apiroute_config=debug,apiroute_stage=debug,apiroute_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "apiroute_config=info,apiroute_stage=info,apiroute_cli=info";

/// Build the filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global subscriber. Logs go to stderr so stdout stays
/// parseable.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
