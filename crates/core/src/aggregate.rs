//! Aggregate root trait for domain models that own a collection of entities.

/// Aggregate root marker + minimal interface.
///
/// The aggregate is the consistency boundary: every mutation of the entities it
/// owns goes through it, so it is the only place that can enforce invariants
/// spanning several entities (e.g. identifier uniqueness).
pub trait AggregateRoot {
    /// Aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per state-changing operation; rejected or no-op operations
    /// leave it untouched.
    fn version(&self) -> u64;
}
