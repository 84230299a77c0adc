#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # narrow
//!
//! Narrow JSON of unknown shape into typed values, one explicit `Result` at
//! a time.
//!
//! This library re-exports the workspace crates for convenience:
//!
//! - [`narrow_core`]: Result combinators, shape guards, conversions.
//! - [`narrow_fetch`]: fetch JSON over HTTP and hand it to a conversion.

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use narrow_core;
pub use narrow_fetch;

pub mod prelude;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed, so it is
/// safe to call from every test.
pub fn init_tracing() -> bool {
    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        debug!("tracing subscriber installed");
    }
    installed
}
