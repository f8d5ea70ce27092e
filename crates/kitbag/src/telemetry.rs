//! Tracing subscriber setup for binaries and tests that embed Kitbag.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the host.

use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, defaulting to
/// `info`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init_tracing() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .is_ok();
    if installed {
        tracing::info!("kitbag tracing initialised");
    }
    installed
}
