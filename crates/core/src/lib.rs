//! Shared building blocks for view-model composition.
//!
//! This crate contains **pure** primitives (identifiers, the error model, the
//! logger capability). No catalog access, no session storage.

pub mod error;
pub mod id;
pub mod logger;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, PromotionId, SessionId};
pub use logger::{Logger, NoopLogger};
pub use value_object::ValueObject;
