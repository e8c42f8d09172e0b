//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity is whatever the domain says it is; it need not be unique within a
/// collection (the inventory store tolerates duplicate ids and resolves them by
/// first match).
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
