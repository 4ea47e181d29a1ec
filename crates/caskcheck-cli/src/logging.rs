//! Logging initialization.
//!
//! Filter directives come from `CASKCHECK_LOG` (e.g. `caskcheck_core=debug`);
//! the default only shows warnings. Output goes to stderr so reports on
//! stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "CASKCHECK_LOG";

/// Install the global subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(%err, "keeping existing subscriber");
    }
}
