//! Derived-field resolvers used by the view-model decorators.
//!
//! Each module is deterministic given its collaborators: no global state, no
//! hidden IO beyond the capability calls it is handed.

pub mod badges;
pub mod highlights;
pub mod promotions;
pub mod quantity;
pub mod variants;

pub use badges::{BadgeDescriptor, BadgeProfile};
pub use highlights::{HighlightAttribute, Highlights};
pub use promotions::{PromotionCache, PromotionSnapshot};
pub use quantity::{QuantityBounds, RequestedQuantity};
pub use variants::VariantProjection;
