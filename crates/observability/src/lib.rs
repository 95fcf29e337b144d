//! Tracing setup and the tracing-backed `Logger` capability.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    crate::tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// `Logger` implementations.
pub mod logger;

pub use logger::TracingLogger;
pub use crate::tracing::LogFormat;
