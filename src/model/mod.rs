//! Pure data structures of the restaurant domain.
//!
//! Dishes, orders and tables carry their own invariants (positive quantities
//! and capacities, non-negative prices). Status changes go through the
//! [`transitions`] tables.

pub mod dish;
pub mod order;
pub mod table;
pub mod transitions;

pub use dish::*;
pub use order::*;
pub use table::*;
pub use transitions::*;
