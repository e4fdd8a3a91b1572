//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two instances holding the same
/// values are interchangeable. Request and report types (search criteria, batch
/// requests, reorder reports) are value objects.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Threshold(u32);
///
/// impl ValueObject for Threshold {}
///
/// assert_eq!(Threshold(10), Threshold(10));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
