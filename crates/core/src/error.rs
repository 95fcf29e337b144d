//! Domain error model.

use thiserror::Error;

/// Result type used across the composition layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Decorators return these; the pipeline catches them at the decorator boundary
/// and substitutes the decorator's default, so none of them reach the caller of
/// `compose`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty string).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A capability is not available on the supplied catalog object.
    #[error("capability not supported: {0}")]
    Unsupported(String),

    /// An upstream collaborator failed or returned an unexpected shape.
    #[error("collaborator failure: {0}")]
    Collaborator(String),

    /// A view-model field was written twice.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported(capability.into())
    }

    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::Collaborator(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
