//! Tracing/logging setup shared by embedding hosts and test harnesses.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with explicit filter directives, ignoring the environment.
pub fn init_with_filter(directives: &str) {
    tracing::init_with_filter(directives);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
