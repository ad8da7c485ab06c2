//! Wiring of the restaurant state and process-wide setup.

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::RestaurantSystem;
pub use self::tracing::setup_tracing;
