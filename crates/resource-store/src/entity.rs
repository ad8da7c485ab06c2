//! # Entity Trait
//!
//! The `Entity` trait is the contract a resource must satisfy to live in a
//! [`KeyedStore`](crate::KeyedStore): it names its identifier type and reports its
//! own id.
//!
//! We use an associated type (`type Id`) rather than a fixed key type so that a
//! `Table` is keyed by a `TableNumber` and a `Dish` by a `DishId`, and the compiler
//! refuses to look one up with the other.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::rc::Rc;

/// Trait that any keyed resource must implement to be managed by a `KeyedStore`.
pub trait Entity {
    /// The unique identifier for this entity (e.g. a newtype over `u32`).
    type Id: Eq + Hash + Clone + Display + Debug;

    /// Returns the identifier this entity is stored under.
    fn id(&self) -> Self::Id;
}

/// Shared entities are keyed by the entity they point at.
impl<T: Entity + ?Sized> Entity for Rc<T> {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }
}

/// Short, human-readable name of a stored type, used as a tracing field.
///
/// Extracts the last path segment (e.g. `"Dish"` instead of
/// `"restaurant_sim::model::dish::Dish"`). Wrapper types resolve to the innermost
/// type, so `Rc<RefCell<Order>>` is reported as `"Order"`.
pub fn entity_type<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .map(|segment| segment.trim_end_matches('>'))
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Booth;

    #[test]
    fn entity_type_strips_module_path() {
        assert_eq!(entity_type::<Booth>(), "Booth");
    }

    #[test]
    fn entity_type_sees_through_wrappers() {
        assert_eq!(entity_type::<Rc<RefCell<Booth>>>(), "Booth");
    }
}
