//! Value object trait: equality by value, not identity.
//!
//! Ingredient requests, estimates and order drafts are value objects: two of
//! them with the same attributes are interchangeable, which is what makes an
//! estimate reproducible for an unchanged catalog.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Quantity { amount: f64, unit: String }
///
/// impl ValueObject for Quantity {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
