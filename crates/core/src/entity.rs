//! Entity trait: identity that survives changes to the rest of the record.

/// Entity marker + minimal interface.
///
/// Catalog records arriving from the remote API are entities: two payloads with
/// the same id describe the same product even if the price or title changed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Whether `other` refers to the same entity, regardless of field values.
    fn same_identity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
