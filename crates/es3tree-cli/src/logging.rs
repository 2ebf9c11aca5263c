//! Log output for the binary. Library crates only emit events; installing a
//! subscriber is the binary's call.

use tracing_subscriber::EnvFilter;

/// Overrides the verbosity flags when set, e.g. `ES3TREE_LOG=es3tree_lib=trace`.
const LOG_ENV: &str = "ES3TREE_LOG";

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    // Logs share stderr with diagnostics; stdout stays clean for trees and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
