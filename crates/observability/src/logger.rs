use storefront_core::Logger;

/// `Logger` that forwards pipeline diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(target: "storefront::pipeline", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "storefront::pipeline", "{message}");
    }
}
