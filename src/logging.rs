//! Logging setup
//!
//! Installs a compact tracing subscriber. `RUST_LOG` takes precedence over
//! the configured level so users can raise verbosity for a single run
//! without touching their settings file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber with the configured level
///
/// `level` is the settings value (e.g. "warn", "debug") and is scoped to
/// this crate. An unparseable level falls back to "warn".
pub fn init(level: &str) {
    // Both the library and the `pbc` binary emit events
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("punchboard={0},pbc={0}", level))
            .unwrap_or_else(|_| EnvFilter::new("punchboard=warn,pbc=warn"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
