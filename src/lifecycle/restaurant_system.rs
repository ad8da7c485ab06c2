use crate::config::SystemConfig;
use crate::demo;
use crate::error::{RestaurantError, Result};
use crate::model::{DishId, OrderId, SharedOrder, Table, TableNumber, TransitionPolicy};
use crate::restaurant::{Menu, Restaurant};
use crate::services::{BillingService, KitchenService, OrderRegistry, TableService};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Owns all restaurant state and hands out services that borrow it.
///
/// `RestaurantSystem` is responsible for:
/// - **State ownership**: the [`Restaurant`] (menu and tables) and the
///   [`OrderRegistry`] live here and nowhere else
/// - **Service wiring**: [`kitchen`](Self::kitchen), [`billing`](Self::billing)
///   and [`tables`](Self::tables) borrow that state with the configured
///   [`TransitionPolicy`]
/// - **Table-side flows**: seating, ordering and submitting to the kitchen
///
/// # Example
///
/// ```
/// use restaurant_sim::lifecycle::RestaurantSystem;
/// use restaurant_sim::model::{DishId, TableNumber};
/// use restaurant_sim::Decimal;
///
/// # fn main() -> Result<(), restaurant_sim::RestaurantError> {
/// let mut system = RestaurantSystem::demo()?;
/// let table = TableNumber(5);
///
/// system.seat(table, 2)?;
/// system.open_order(table)?;
/// system.add_dish(table, DishId(1), 2)?;
/// let order_id = system.submit_order(table)?;
///
/// system.kitchen().start_preparing(order_id)?;
/// system.kitchen().order_is_ready(order_id)?;
///
/// let mut billing = system.billing();
/// billing.mark_served(table)?;
/// billing.request_bill(table)?;
/// assert_eq!(billing.pay(table)?, Decimal::from(96));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RestaurantSystem {
    restaurant: Restaurant,
    orders: OrderRegistry,
    config: SystemConfig,
}

impl RestaurantSystem {
    pub fn new(restaurant: Restaurant, config: SystemConfig) -> Self {
        info!(
            dishes = restaurant.menu().len(),
            tables = restaurant.len(),
            policy = ?config.policy,
            "Restaurant system ready"
        );
        Self {
            restaurant,
            orders: OrderRegistry::new(),
            config,
        }
    }

    /// The demo menu and floor plan with the default configuration.
    pub fn demo() -> Result<Self> {
        Ok(Self::new(demo::restaurant()?, SystemConfig::default()))
    }

    /// Builds the restaurant from `config`, filling an empty menu or table list
    /// with the demo data.
    pub fn from_config(config: SystemConfig) -> Result<Self> {
        let menu = if config.menu.is_empty() {
            demo::menu()?
        } else {
            let mut menu = Menu::new();
            for dish in &config.menu {
                menu.add_dish(dish.clone())?;
            }
            menu
        };

        let mut restaurant = Restaurant::new(menu);
        let tables = if config.tables.is_empty() {
            demo::tables()?
        } else {
            config
                .tables
                .iter()
                .map(|layout| Table::new(layout.number, layout.capacity))
                .collect::<Result<Vec<_>>>()?
        };
        for table in tables {
            restaurant.add_table(table)?;
        }

        Ok(Self::new(restaurant, config))
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn restaurant_mut(&mut self) -> &mut Restaurant {
        &mut self.restaurant
    }

    pub fn orders(&self) -> &OrderRegistry {
        &self.orders
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.config.policy
    }

    pub fn kitchen(&self) -> KitchenService<'_> {
        KitchenService::with_policy(&self.orders, self.config.policy)
    }

    pub fn billing(&mut self) -> BillingService<'_> {
        BillingService::with_policy(&mut self.restaurant, self.config.policy)
    }

    pub fn tables(&self) -> TableService<'_> {
        TableService::new(&self.restaurant)
    }

    #[instrument(skip(self))]
    pub fn seat(&mut self, table: TableNumber, customers: u32) -> Result<()> {
        self.restaurant.get_table_mut(table)?.seat(customers)?;
        info!(%table, customers, "Table seated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn open_order(&mut self, table: TableNumber) -> Result<()> {
        self.restaurant.get_table_mut(table)?.open_new_order()?;
        info!(%table, "Order opened");
        Ok(())
    }

    /// Adds `quantity` portions of a menu dish to the table's open order.
    ///
    /// # Errors
    /// - `NotFound` for an unknown table or dish
    /// - `InvalidState` if the table has no open order
    /// - `InvalidArgument` if `quantity` is zero
    #[instrument(skip(self))]
    pub fn add_dish(&mut self, table: TableNumber, dish_id: DishId, quantity: u32) -> Result<()> {
        let order = self.active_order(table)?;
        let dish = self.restaurant.menu().get_dish(dish_id)?;
        debug!(dish = ?dish, "add_dish called");

        order.borrow_mut().add_dish(dish, quantity)?;
        info!(%table, %dish_id, quantity, bill = %order.borrow().total_price(), "Dish added");
        Ok(())
    }

    /// Registers the table's order and sends it to the kitchen.
    ///
    /// # Errors
    /// `InvalidState` if the table has no open order or it was already submitted.
    #[instrument(skip(self))]
    pub fn submit_order(&mut self, table: TableNumber) -> Result<OrderId> {
        let order = self.active_order(table)?;
        if let Some(id) = order.borrow().id() {
            return Err(RestaurantError::InvalidState(format!(
                "order of {table} was already submitted as {id}"
            )));
        }

        let id = self.orders.add_order(order);
        self.kitchen().submit_order_to_kitchen(id)?;
        info!(%table, order_id = %id, "Order submitted");
        Ok(id)
    }

    /// The registry id of the table's current order, once submitted.
    pub fn order_id_for_table(&self, table: TableNumber) -> Result<Option<OrderId>> {
        let table = self.restaurant.get_table(table)?;
        Ok(table.order().and_then(|order| order.borrow().id()))
    }

    fn active_order(&self, table: TableNumber) -> Result<SharedOrder> {
        self.restaurant
            .get_table(table)?
            .order()
            .map(Rc::clone)
            .ok_or_else(|| RestaurantError::InvalidState(format!("{table} has no active order")))
    }
}
