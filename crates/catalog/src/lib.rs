//! Collaborator capabilities consumed by the composition pipeline.
//!
//! The catalog, promotion engine and session storage are black boxes; this crate
//! defines the interfaces they must satisfy plus in-memory implementations used
//! by tests, benchmarks and local tooling.

pub mod fixture;
pub mod product;
pub mod promotion;
pub mod session;

pub use fixture::CatalogProduct;
pub use product::{
    AvailabilityModel, BadgeFlags, CatalogReader, CustomAttributes, ImageRef, InventoryRecord,
    Money, PriceModel, ProductKind, VariationAttribute, VariationValue,
};
pub use promotion::{InMemoryPromotionSource, Promotion, PromotionMessage, PromotionSource};
pub use session::{InMemorySessionStore, SessionStore};
