//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; they are defined entirely by their
/// attribute values and are never mutated in place. A price variant derived
/// from a base price is a value object: two variants with the same id, name and
/// price are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Variant { id: VariantId, name: &'static str, price: f64 }
///
/// impl ValueObject for Variant {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
