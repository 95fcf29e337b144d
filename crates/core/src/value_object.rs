//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Everything a decorator writes into a view-model (badge descriptors, variant
/// projections, quantity bounds, ...) is a value object: it has no identity of
/// its own and two instances with the same attributes are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct BadgeDescriptor {
///     badge_type: &'static str,
///     rank: u8,
/// }
///
/// impl ValueObject for BadgeDescriptor {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
