//! Entity trait: things with an identity that outlives changes to their fields.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same thing, even when their other
/// fields differ (a product whose stock was restocked is still that product).
/// Collections owning entities key them by [`Entity::id`].
pub trait Entity {
    /// Identifier type; must be usable as a map key.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
