//! Logging infrastructure for the Trellis CLI.
//!
//! Structured logging via the `tracing` ecosystem: `--verbose` for debug,
//! `--quiet` for errors only, `RUST_LOG` for custom filters.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// The filter level is determined in this order:
/// 1. `--verbose`: DEBUG for trellis crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for trellis crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("trellis=debug,trellis_config=debug,trellis_cli=debug")
    } else if quiet {
        EnvFilter::new("trellis=error,trellis_config=error,trellis_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("trellis=info,trellis_config=info,trellis_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
