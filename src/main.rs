use restaurant_sim::config::SystemConfig;
use restaurant_sim::lifecycle::{setup_tracing, RestaurantSystem};
use restaurant_sim::model::{DishId, TableNumber};
use std::error::Error;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn Error>> {
    let config = SystemConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!("Starting restaurant simulation");
    let mut system = RestaurantSystem::from_config(config)?;
    let table = TableNumber(5);

    let span = tracing::info_span!("seating");
    span.in_scope(|| -> restaurant_sim::Result<()> {
        info!("Seating guests");
        system.seat(table, 2)?;
        system.open_order(table)
    })?;

    let span = tracing::info_span!("ordering");
    let order_id = span.in_scope(|| -> restaurant_sim::Result<_> {
        system.add_dish(table, DishId(1), 2)?;
        system.submit_order(table)
    })?;
    info!(order_id = %order_id, "Order sent to the kitchen");

    let span = tracing::info_span!("kitchen");
    span.in_scope(|| -> restaurant_sim::Result<()> {
        let kitchen = system.kitchen();
        kitchen.start_preparing(order_id)?;
        kitchen.order_is_ready(order_id)?;
        Ok(())
    })?;

    let span = tracing::info_span!("billing");
    let paid = span.in_scope(|| -> restaurant_sim::Result<_> {
        let mut billing = system.billing();
        billing.mark_served(table)?;
        billing.request_bill(table)?;
        billing.pay(table)
    });

    match paid {
        Ok(total) => info!(%table, %total, "Visit completed"),
        Err(e) => {
            error!(error = %e, "Billing failed");
            return Err(e.into());
        }
    }

    info!("Simulation completed successfully");
    Ok(())
}
