//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** and are **immutable**: two instances
/// holding the same values are interchangeable. `Money` and `TaxRate` are the
/// value objects of this workspace.
///
/// ```
/// use storefront_core::{Money, ValueObject};
///
/// fn same<V: ValueObject>(a: &V, b: &V) -> bool {
///     a == b
/// }
///
/// assert!(same(&Money::from_cents(199_999), &Money::from_cents(199_999)));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
