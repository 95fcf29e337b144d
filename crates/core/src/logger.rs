//! Diagnostic sink capability.

/// Fire-and-forget diagnostic sink injected into the pipeline.
///
/// Implementations must never affect control flow: no panics, no errors.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
}

impl<L> Logger for std::sync::Arc<L>
where
    L: Logger + ?Sized,
{
    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// Logger that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn error(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}
