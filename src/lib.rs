//! # Restaurant Simulator
//!
//! > **The core of a restaurant: menu, tables, orders, kitchen and billing.**
//!
//! Guests are seated at a [`Table`](model::Table), which opens an
//! [`Order`](model::Order). Once the order is submitted it is shared with the
//! [`OrderRegistry`](services::OrderRegistry) and walks through the kitchen
//! workflow, then the table asks for its bill and pays.
//!
//! ## Core Concepts
//!
//! ### State machines as data
//! Every legal status change is a row in [`model::transitions`]. Services look
//! the event up and either get the next status or an `InvalidState` error that
//! names the current status and the allowed ones. A
//! [`TransitionPolicy`](model::TransitionPolicy) selects between the lenient
//! default rows and a strict set that requires `READY` before serving and
//! freezes orders once they reach the kitchen.
//!
//! ### Generic stores
//! Menu, tables and orders all live in the insertion-ordered stores of the
//! `resource-store` crate. Duplicate and missing ids surface as
//! [`RestaurantError::DuplicateKey`] and [`RestaurantError::NotFound`].
//!
//! ### Shared orders
//! A submitted order is reachable from its table and from the registry, so it
//! is held as a [`SharedOrder`](model::SharedOrder) (`Rc<RefCell<Order>>`). The
//! whole system is single-threaded.
//!
//! ## Module Tour
//!
//! - [`model`]: dishes, orders, tables and the transition tables.
//! - [`restaurant`]: the [`Menu`](restaurant::Menu) and the
//!   [`Restaurant`](restaurant::Restaurant) that owns the tables.
//! - [`services`]: order registry, kitchen, billing and table queries.
//! - [`lifecycle`]: [`RestaurantSystem`](lifecycle::RestaurantSystem), which owns
//!   the state and wires the services, plus tracing setup.
//! - [`config`]: TOML configuration.
//! - [`demo`]: the built-in demo menu and floor plan.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RESTAURANT_CONFIG=restaurant.toml cargo run
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod restaurant;
pub mod services;

pub use error::{ErrorKind, RestaurantError, Result};
pub use rust_decimal::Decimal;
