use crate::error::{RestaurantError, Result};
use crate::model::{OrderEvent, SharedOrder, Table, TableNumber, TableStatus, TransitionPolicy};
use crate::restaurant::Restaurant;
use rust_decimal::Decimal;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Table-side end of a visit: serving, billing and payment.
///
/// `mark_served` changes only the order. The table stays `OCCUPIED` until the
/// guests ask for the bill, and `pay` frees it again.
#[derive(Debug)]
pub struct BillingService<'a> {
    restaurant: &'a mut Restaurant,
    policy: TransitionPolicy,
}

impl<'a> BillingService<'a> {
    pub fn new(restaurant: &'a mut Restaurant) -> Self {
        Self::with_policy(restaurant, TransitionPolicy::default())
    }

    pub fn with_policy(restaurant: &'a mut Restaurant, policy: TransitionPolicy) -> Self {
        Self { restaurant, policy }
    }

    /// Marks the table's order `SERVED`.
    ///
    /// # Errors
    /// `InvalidState` if the table has no order, or if the order may not be
    /// served yet under the active policy.
    #[instrument(skip(self))]
    pub fn mark_served(&mut self, number: TableNumber) -> Result<()> {
        let table = self.restaurant.get_table(number)?;
        let order = active_order(table)?;
        let mut order = order.borrow_mut();
        let next = self
            .policy
            .next_order_status(OrderEvent::Serve, order_label(number), order.status())
            .inspect_err(|err| warn!(table = %number, error = %err, "Serve rejected"))?;

        order.set_status(next);
        info!(table = %number, status = %next, "Order served");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn request_bill(&mut self, number: TableNumber) -> Result<()> {
        let table = self.restaurant.get_table_mut(number)?;
        table
            .request_bill()
            .inspect_err(|err| warn!(table = %number, error = %err, "Bill request rejected"))?;
        info!(table = %number, bill = %table.bill(), "Bill requested");
        Ok(())
    }

    /// The table's current bill. Read-only.
    pub fn calculate_bill(&self, number: TableNumber) -> Result<Decimal> {
        Ok(self.restaurant.get_table(number)?.bill())
    }

    /// Settles the bill: marks the order `PAID`, frees the table and returns
    /// the amount paid.
    ///
    /// # Errors
    /// `InvalidState` unless the table is `WAITING_FOR_BILL` with an order.
    #[instrument(skip(self))]
    pub fn pay(&mut self, number: TableNumber) -> Result<Decimal> {
        let table = self.restaurant.get_table_mut(number)?;
        if table.status() != TableStatus::WaitingForBill {
            let err = RestaurantError::InvalidState(format!(
                "{number} is {}; pay requires one of [{}]",
                table.status(),
                TableStatus::WaitingForBill
            ));
            warn!(table = %number, error = %err, "Payment rejected");
            return Err(err);
        }
        let order = Rc::clone(active_order(table)?);
        let total = table.bill();
        debug!(table = %number, %total, "pay called");

        {
            let mut order = order.borrow_mut();
            let next =
                self.policy
                    .next_order_status(OrderEvent::Pay, order_label(number), order.status())?;
            order.set_status(next);
        }
        table.clear();

        info!(table = %number, %total, "Bill paid");
        Ok(total)
    }
}

fn active_order(table: &Table) -> Result<&SharedOrder> {
    table.order().ok_or_else(|| {
        RestaurantError::InvalidState(format!("{} has no active order", table.number()))
    })
}

fn order_label(number: TableNumber) -> String {
    format!("order of {number}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{Dish, DishId, OrderStatus};
    use crate::restaurant::Menu;

    fn restaurant() -> Restaurant {
        let mut menu = Menu::new();
        menu.add_dish(Dish::new(1, "Margherita Pizza", Decimal::from(48), 15).unwrap())
            .unwrap();
        let mut restaurant = Restaurant::new(menu);
        restaurant.add_table(Table::new(5, 8).unwrap()).unwrap();
        restaurant
    }

    fn seat_with_pizza(restaurant: &mut Restaurant) -> SharedOrder {
        let pizza = restaurant.menu().get_dish(DishId(1)).unwrap();
        let table = restaurant.get_table_mut(TableNumber(5)).unwrap();
        table.seat(2).unwrap();
        let order = Rc::clone(table.open_new_order().unwrap());
        order.borrow_mut().add_dish(pizza, 2).unwrap();
        order
    }

    #[test]
    fn serving_leaves_the_table_occupied() {
        let mut restaurant = restaurant();
        let order = seat_with_pizza(&mut restaurant);

        BillingService::new(&mut restaurant).mark_served(TableNumber(5)).unwrap();
        assert_eq!(order.borrow().status(), OrderStatus::Served);
        assert_eq!(
            restaurant.get_table(TableNumber(5)).unwrap().status(),
            TableStatus::Occupied
        );
    }

    #[test]
    fn serving_needs_an_order() {
        let mut restaurant = restaurant();
        let err = BillingService::new(&mut restaurant)
            .mark_served(TableNumber(5))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn paying_returns_the_bill_and_frees_the_table() {
        let mut restaurant = restaurant();
        let order = seat_with_pizza(&mut restaurant);
        let mut billing = BillingService::new(&mut restaurant);

        assert_eq!(billing.calculate_bill(TableNumber(5)).unwrap(), Decimal::from(96));
        billing.request_bill(TableNumber(5)).unwrap();
        assert_eq!(billing.pay(TableNumber(5)).unwrap(), Decimal::from(96));
        assert_eq!(billing.calculate_bill(TableNumber(5)).unwrap(), Decimal::ZERO);

        let table = restaurant.get_table(TableNumber(5)).unwrap();
        assert_eq!(table.status(), TableStatus::Free);
        assert!(!table.has_order());
        assert_eq!(order.borrow().status(), OrderStatus::Paid);
    }

    #[test]
    fn paying_before_the_bill_is_requested_fails() {
        let mut restaurant = restaurant();
        let order = seat_with_pizza(&mut restaurant);

        let err = BillingService::new(&mut restaurant).pay(TableNumber(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            err.to_string(),
            "Invalid state: table_5 is OCCUPIED; pay requires one of [WAITING_FOR_BILL]"
        );
        assert_eq!(order.borrow().status(), OrderStatus::Created);
        assert!(restaurant.get_table(TableNumber(5)).unwrap().has_order());
    }

    #[test]
    fn lenient_serving_ignores_the_order_status() {
        let mut restaurant = restaurant();
        let order = seat_with_pizza(&mut restaurant);
        order.borrow_mut().set_status(OrderStatus::Paid);

        BillingService::new(&mut restaurant).mark_served(TableNumber(5)).unwrap();
        assert_eq!(order.borrow().status(), OrderStatus::Served);
    }

    #[test]
    fn strict_policy_requires_ready_before_serving() {
        let mut restaurant = restaurant();
        let order = seat_with_pizza(&mut restaurant);
        let mut billing = BillingService::with_policy(&mut restaurant, TransitionPolicy::Strict);

        let err = billing.mark_served(TableNumber(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        order.borrow_mut().set_status(OrderStatus::Ready);
        billing.mark_served(TableNumber(5)).unwrap();
        assert_eq!(order.borrow().status(), OrderStatus::Served);
    }
}
