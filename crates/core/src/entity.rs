//! Entities: things tracked by id across state changes (products, orders).

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// A domain object with a stable identifier.
///
/// Stock and lead time of a product change while it is fulfilled; its id
/// does not. Stores key their records by [`Entity::id`].
pub trait Entity {
    type Id: Copy + Ord + Hash + Debug + Display;

    fn id(&self) -> &Self::Id;

    /// `true` when both values refer to the same tracked object, whatever
    /// their current state.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
