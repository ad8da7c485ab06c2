//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber for
//! the whole process.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from the
//! `log_filter` of the [`SystemConfig`](crate::config::SystemConfig). Module paths
//! are hidden (`with_target(false)`); stores report an `entity_type` field and
//! services report the `order_id` or `table` they act on instead.
//!
//! ```bash
//! # Transitions and store mutations
//! RUST_LOG=info cargo run
//!
//! # Also show payloads at service entry points
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! ```text
//! INFO seating: Table seated table=table_5 customers=2
//! INFO ordering:add_order: Order registered order_id=order_1
//! INFO ordering:submit_order_to_kitchen{id=OrderId(1)}: Order advanced order_id=order_1 event=submit status=SUBMITTED
//! INFO billing:pay{number=TableNumber(5)}: Bill paid table=table_5 total=96
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it again is a no-op.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type / order_id fields replace module paths
        .compact()
        .try_init();
}
