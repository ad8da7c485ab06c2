//! # Resource Store
//!
//! This crate provides the in-memory building blocks the restaurant core keeps its
//! entities in. It follows a **Resource-Oriented** layout: every kind of resource
//! (dish, table, order) lives in a uniform store with the same lookup, insert and
//! removal rules, so the domain code only has to describe *what* an entity is.
//!
//! ## Two Kinds of Store
//!
//! | Store | Who picks the id | Used for |
//! |-------|------------------|----------|
//! | [`KeyedStore`] | The entity itself, via [`Entity::id`] | Menus (dish id), floor plans (table number) |
//! | [`SequencedStore`] | The store, from a counter starting at 1 | Registries that mint ids on submission |
//!
//! Both stores keep **insertion order** for listing and report failures through the
//! same [`StoreError`] type, so callers can map them onto their own error taxonomy.
//!
//! ## Id Minting
//!
//! A [`SequencedStore`] owns its counter. Ids are handed out monotonically and are
//! never reused, even after the entry they named has been removed. There is no
//! process-wide state: two stores count independently.
//!
//! ```rust
//! use resource_store::SequencedStore;
//!
//! let mut tickets: SequencedStore<u32, &str> = SequencedStore::new();
//! let first = tickets.insert("soup");
//! let second = tickets.insert("bread");
//! assert_eq!((first, second), (1, 2));
//!
//! tickets.remove(&second).unwrap();
//! assert_eq!(tickets.insert("salad"), 3);
//! ```
//!
//! ## Observability
//!
//! Every mutation is traced with the entity type as a structured field: `debug!` on
//! entry, `info!` on success (with the resulting store size) and `warn!` when a
//! request is rejected.
//!
//! ## Concurrency Model
//!
//! Stores are plain owned values. They are meant to be held by a single long-lived
//! service object and passed around by reference; there is no interior locking.

pub mod entity;
pub mod error;
pub mod store;

pub use entity::{entity_type, Entity};
pub use error::StoreError;
pub use store::{KeyedStore, SequencedStore};
