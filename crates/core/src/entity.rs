//! Identity that outlives state changes.

/// A product keeps its id while its stock moves; an order keeps its id while
/// it ships. Two entities are the same thing exactly when their ids match.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Same entity, regardless of current state.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
