//! Services that drive orders and tables through their workflows.
//!
//! The services borrow the state they act on from
//! [`RestaurantSystem`](crate::lifecycle::RestaurantSystem) for the duration of a
//! call chain and own nothing themselves.

pub mod billing;
pub mod kitchen;
pub mod order_registry;
pub mod table_service;

pub use billing::BillingService;
pub use kitchen::KitchenService;
pub use order_registry::OrderRegistry;
pub use table_service::TableService;
