//! # Generic Stores
//!
//! This module defines the two stores the domain keeps its state in. Both own an
//! id-to-value map plus the insertion order of its keys, so listings come back in
//! the order entries were added.
//!
//! ## Operations
//!
//! * **Insert**:
//!     - `KeyedStore` asks the entity for its id and rejects it with
//!       [`StoreError::DuplicateKey`] if that id is taken.
//!     - `SequencedStore` mints the next id from its counter and cannot collide.
//! * **Get**: Returns the entry or [`StoreError::NotFound`].
//! * **Remove**: Drops the entry and its position in the listing order. Removing
//!   never rewinds the `SequencedStore` counter.

use crate::entity::{entity_type, Entity};
use crate::error::StoreError;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use tracing::{debug, info, warn};

/// An insertion-ordered store of entities keyed by their own id.
#[derive(Debug, Clone)]
pub struct KeyedStore<T: Entity> {
    entries: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: Entity> Default for KeyedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> KeyedStore<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Inserts an entity under its own id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if an entity with the same id is
    /// already stored. The store is left untouched in that case.
    pub fn insert(&mut self, item: T) -> Result<T::Id, StoreError> {
        let entity_type = entity_type::<T>();
        let id = item.id();
        debug!(entity_type, %id, "Insert");

        if self.entries.contains_key(&id) {
            warn!(entity_type, %id, "Duplicate key");
            return Err(StoreError::duplicate(entity_type, &id));
        }

        self.order.push(id.clone());
        self.entries.insert(id.clone(), item);
        info!(entity_type, %id, size = self.entries.len(), "Inserted");
        Ok(id)
    }

    pub fn get(&self, id: &T::Id) -> Result<&T, StoreError> {
        self.entries
            .get(id)
            .ok_or_else(|| StoreError::not_found(entity_type::<T>(), id))
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Result<&mut T, StoreError> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(entity_type::<T>(), id))
    }

    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.entries.contains_key(id)
    }

    /// Removes an entity, returning it if it was present.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Remove");
        let Some(removed) = self.entries.remove(id) else {
            warn!(entity_type, %id, "Not found");
            return None;
        };
        self.order.retain(|key| key != id);
        info!(entity_type, %id, size = self.entries.len(), "Removed");
        Some(removed)
    }

    /// Iterates over the stored entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An insertion-ordered store that mints its own ids.
///
/// The store maintains a `u32` counter (`next_id`) starting at 1. Each insert
/// converts the current counter into `K` and advances it; ids are never handed out
/// twice, so a removed id stays retired.
#[derive(Debug, Clone)]
pub struct SequencedStore<K, V> {
    entries: HashMap<K, V>,
    order: Vec<K>,
    next_id: u32,
}

impl<K, V> Default for SequencedStore<K, V>
where
    K: Eq + Hash + Clone + Display + From<u32>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SequencedStore<K, V>
where
    K: Eq + Hash + Clone + Display + From<u32>,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Stores `value` under a freshly minted id and returns that id.
    pub fn insert(&mut self, value: V) -> K {
        self.insert_with(|_| value)
    }

    /// Mints the next id and stores the value produced by `build`.
    ///
    /// `build` receives the id before the value is stored, which lets callers
    /// stamp the id onto the value itself.
    pub fn insert_with(&mut self, build: impl FnOnce(&K) -> V) -> K {
        let entity_type = entity_type::<V>();
        let id = K::from(self.next_id);
        self.next_id += 1;
        debug!(entity_type, %id, "Insert");

        let value = build(&id);
        self.order.push(id.clone());
        self.entries.insert(id.clone(), value);
        info!(entity_type, %id, size = self.entries.len(), "Inserted");
        id
    }

    pub fn get(&self, id: &K) -> Result<&V, StoreError> {
        self.entries
            .get(id)
            .ok_or_else(|| StoreError::not_found(entity_type::<V>(), id))
    }

    pub fn get_mut(&mut self, id: &K) -> Result<&mut V, StoreError> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(entity_type::<V>(), id))
    }

    /// Removes the entry stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `id`.
    pub fn remove(&mut self, id: &K) -> Result<V, StoreError> {
        let entity_type = entity_type::<V>();
        debug!(entity_type, %id, "Remove");
        match self.entries.remove(id) {
            Some(value) => {
                self.order.retain(|key| key != id);
                info!(entity_type, %id, size = self.entries.len(), "Removed");
                Ok(value)
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(StoreError::not_found(entity_type, id))
            }
        }
    }

    /// Iterates over `(id, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.entries.get_key_value(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
