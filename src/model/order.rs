//! One table visit's order.
//!
//! An order is a list of dish lines plus an aggregate workflow status. It is
//! created empty by its [`Table`](crate::model::Table), stays exclusively owned by
//! that table until it is submitted, and is then shared with the
//! [`OrderRegistry`](crate::services::OrderRegistry) through a [`SharedOrder`].
//!
//! The order performs no transition validation of its own: the kitchen and
//! billing services consult the transition tables before calling
//! [`Order::set_status`].

use crate::error::{RestaurantError, Result};
use crate::model::{Dish, DishId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// An order shared between its table and the order registry.
pub type SharedOrder = Rc<RefCell<Order>>;

/// Type-safe identifier for submitted Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Workflow status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Created,
    Submitted,
    InPrep,
    Ready,
    Served,
    Paid,
    /// Reserved; no operation currently cancels an order.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Created,
        OrderStatus::Submitted,
        OrderStatus::InPrep,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Paid,
        OrderStatus::Cancelled,
    ];

    /// Every status an order can still leave.
    pub const OPEN: [OrderStatus; 5] = [
        OrderStatus::Created,
        OrderStatus::Submitted,
        OrderStatus::InPrep,
        OrderStatus::Ready,
        OrderStatus::Served,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Submitted => "SUBMITTED",
            OrderStatus::InPrep => "IN_PREP",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// One dish line within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    dish: Rc<Dish>,
    quantity: u32,
}

impl OrderItem {
    pub fn new(dish: Rc<Dish>, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(RestaurantError::InvalidArgument(format!(
                "quantity of {} must be positive",
                dish.id()
            )));
        }
        line_total(&dish, quantity)?;
        Ok(Self { dish, quantity })
    }

    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_price(&self) -> Decimal {
        self.dish.price() * Decimal::from(self.quantity)
    }

    pub fn increase_quantity(&mut self, amount: u32) -> Result<()> {
        if amount == 0 {
            return Err(RestaurantError::InvalidArgument(
                "amount must be positive".to_string(),
            ));
        }
        let quantity = self.quantity.checked_add(amount).ok_or_else(|| {
            RestaurantError::InvalidArgument(format!(
                "quantity of {} would overflow",
                self.dish.id()
            ))
        })?;
        line_total(&self.dish, quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Lowers the quantity by `amount`.
    ///
    /// A line can never reach zero this way; remove it from the order instead.
    pub fn decrease_quantity(&mut self, amount: u32) -> Result<()> {
        if amount == 0 {
            return Err(RestaurantError::InvalidArgument(
                "amount must be positive".to_string(),
            ));
        }
        if amount >= self.quantity {
            return Err(RestaurantError::InvalidArgument(format!(
                "quantity of {} cannot drop to zero or below (have {}, removing {amount})",
                self.dish.id(),
                self.quantity
            )));
        }
        self.quantity -= amount;
        Ok(())
    }
}

fn line_total(dish: &Dish, quantity: u32) -> Result<Decimal> {
    dish.price()
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| {
            RestaurantError::InvalidArgument(format!(
                "{quantity} x {} exceeds the representable total",
                dish.id()
            ))
        })
}

/// A table visit's dish lines and workflow status.
///
/// Every line total, the order total and the dish count are kept within range
/// by [`Order::add_dish`], so the derived reads never overflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    id: Option<OrderId>,
    lines: Vec<OrderItem>,
    status: OrderStatus,
}

impl Order {
    /// Creates an empty order in the `CREATED` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the order for sharing between a table and the registry.
    pub fn shared(self) -> SharedOrder {
        Rc::new(RefCell::new(self))
    }

    /// The registry id, once the order has been submitted.
    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: OrderId) {
        self.id = Some(id);
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Adds `quantity` portions of `dish`, merging into an existing line if the
    /// dish is already on the order.
    pub fn add_dish(&mut self, dish: Rc<Dish>, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(RestaurantError::InvalidArgument(format!(
                "quantity of {} must be positive",
                dish.id()
            )));
        }

        self.check_totals(&dish, quantity)?;
        match self.line_mut(dish.id()) {
            Some(line) => line.increase_quantity(quantity),
            None => {
                self.lines.push(OrderItem::new(dish, quantity)?);
                Ok(())
            }
        }
    }

    /// Fails if adding `quantity` portions of `dish` would overflow the dish
    /// count, the line total or the order total.
    fn check_totals(&self, dish: &Dish, quantity: u32) -> Result<()> {
        let overflow = || {
            RestaurantError::InvalidArgument(format!(
                "adding {quantity} x {} would overflow the order totals",
                dish.id()
            ))
        };
        self.total_dish_count()
            .checked_add(quantity)
            .ok_or_else(overflow)?;

        let current = self.item(dish.id()).map_or(0, OrderItem::quantity);
        let line_quantity = current.checked_add(quantity).ok_or_else(overflow)?;
        let line = line_total(dish, line_quantity)?;
        let others: Decimal = self
            .lines
            .iter()
            .filter(|item| item.dish.id() != dish.id())
            .map(OrderItem::total_price)
            .sum();
        others.checked_add(line).ok_or_else(overflow)?;
        Ok(())
    }

    /// Removes the whole line for `dish_id`. Returns whether a line was removed.
    pub fn remove_dish(&mut self, dish_id: DishId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.dish.id() != dish_id);
        self.lines.len() != before
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.lines
    }

    pub fn item(&self, dish_id: DishId) -> Option<&OrderItem> {
        self.lines.iter().find(|line| line.dish.id() == dish_id)
    }

    fn line_mut(&mut self, dish_id: DishId) -> Option<&mut OrderItem> {
        self.lines.iter_mut().find(|line| line.dish.id() == dish_id)
    }

    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(OrderItem::total_price).sum()
    }

    /// Number of distinct dishes on the order.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of portions across all lines.
    pub fn total_dish_count(&self) -> u32 {
        self.lines.iter().map(OrderItem::quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
