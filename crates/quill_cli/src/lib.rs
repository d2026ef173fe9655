//! Quill command-line driver.
//!
//! Highlights and re-indents files from disk with the Quill mode. Each file
//! gets its own [`quill_mode::JsMode`], so files are processed in parallel.

pub mod commands;
mod error;
pub mod options;

use std::sync::Once;

pub use error::CliError;
pub use options::Options;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber.
///
/// Safe to call more than once. Output is enabled only when `RUST_LOG` is
/// set, e.g. `RUST_LOG=quill_mode=trace quill highlight app.js`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
