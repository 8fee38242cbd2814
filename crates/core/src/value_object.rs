//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and never change after construction. Two
/// season windows with the same dates are the same window; a product with the
/// same name but a different id is a different product (an [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
