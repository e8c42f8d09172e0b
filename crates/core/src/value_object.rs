//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two with the same attribute values are
/// interchangeable. A category or a sort direction is a value object, an
/// inventory item is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Direction { Up, Down }
///
/// impl ValueObject for Direction {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
