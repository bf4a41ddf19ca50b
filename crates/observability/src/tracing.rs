//! Tracing/logging initialization.
//!
//! Enforcement decisions, rule writes, and discarded rule tokens all surface
//! through `tracing`; hosts that install their own subscriber can skip this
//! module entirely.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filter directives come from `RUST_LOG`, defaulting to `info`. Safe to
/// call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize with explicit directives (e.g. `"supplant_enforcer=debug"`),
/// ignoring the environment.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    // JSON logs + timestamps.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
