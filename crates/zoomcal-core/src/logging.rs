#![forbid(unsafe_code)]

//! Structured logging support (feature `tracing`).
//!
//! Re-exports the `tracing` macros so downstream crates can write
//! `zoomcal_core::debug!(...)` without depending on `tracing` directly.
//! With the `tracing-json` feature, [`init_json`] installs a JSON subscriber
//! filtered by `RUST_LOG` for production logging.

pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatted `tracing` subscriber filtered by `RUST_LOG`.
///
/// Call once at startup. Subsequent calls are a no-op (the first subscriber
/// wins); this never panics on double initialization.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
