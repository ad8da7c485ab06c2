use crate::error::Result;
use crate::model::{DishId, OrderEvent, OrderId, OrderStatus, TransitionPolicy};
use crate::services::OrderRegistry;
use tracing::{info, instrument, warn};

/// Moves registered orders through the kitchen workflow.
///
/// Every step fires exactly one [`OrderEvent`] and is only legal from its
/// single predecessor status: `CREATED -> SUBMITTED -> IN_PREP -> READY`.
/// A rejected step leaves the order untouched.
#[derive(Debug, Clone, Copy)]
pub struct KitchenService<'a> {
    orders: &'a OrderRegistry,
    policy: TransitionPolicy,
}

impl<'a> KitchenService<'a> {
    pub fn new(orders: &'a OrderRegistry) -> Self {
        Self::with_policy(orders, TransitionPolicy::default())
    }

    pub fn with_policy(orders: &'a OrderRegistry, policy: TransitionPolicy) -> Self {
        Self { orders, policy }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    #[instrument(skip(self))]
    pub fn submit_order_to_kitchen(&self, id: OrderId) -> Result<OrderStatus> {
        self.advance(id, OrderEvent::Submit)
    }

    #[instrument(skip(self))]
    pub fn start_preparing(&self, id: OrderId) -> Result<OrderStatus> {
        self.advance(id, OrderEvent::StartPreparing)
    }

    #[instrument(skip(self))]
    pub fn order_is_ready(&self, id: OrderId) -> Result<OrderStatus> {
        self.advance(id, OrderEvent::MarkReady)
    }

    /// Removes a dish line from a registered order.
    ///
    /// Returns whether the dish was on the order. Under
    /// [`TransitionPolicy::Strict`] the order must not have been submitted yet.
    #[instrument(skip(self))]
    pub fn remove_dish_from_order(&self, id: OrderId, dish_id: DishId) -> Result<bool> {
        let mut order = self.orders.get_order(id)?.borrow_mut();
        self.policy
            .check_dish_removal(id, order.status())
            .inspect_err(|err| warn!(order_id = %id, error = %err, "Dish removal rejected"))?;

        let removed = order.remove_dish(dish_id);
        info!(order_id = %id, %dish_id, removed, "Dish removal");
        Ok(removed)
    }

    fn advance(&self, id: OrderId, event: OrderEvent) -> Result<OrderStatus> {
        let mut order = self.orders.get_order(id)?.borrow_mut();
        let next = self
            .policy
            .next_order_status(event, id, order.status())
            .inspect_err(|err| warn!(order_id = %id, %event, error = %err, "Transition rejected"))?;

        order.set_status(next);
        info!(order_id = %id, %event, status = %next, "Order advanced");
        Ok(next)
    }
}
