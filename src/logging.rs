// SPDX-License-Identifier: MPL-2.0
//! Logging setup using tracing.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` is honored unless `verbose` forces the `debug` level.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(err) = result {
        // A subscriber is already installed, so this still reaches it.
        tracing::warn!(error = %err, "logging already initialized");
    }
}
