use crate::error::{RestaurantError, Result};
use crate::model::transitions::{next_table_status, TableEvent};
use crate::model::{Order, SharedOrder};
use resource_store::Entity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableNumber(pub u32);

impl From<u32> for TableNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl Display for TableNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table_{}", self.0)
    }
}

/// Seating status of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Free,
    Occupied,
    WaitingForBill,
}

impl Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TableStatus::Free => "FREE",
            TableStatus::Occupied => "OCCUPIED",
            TableStatus::WaitingForBill => "WAITING_FOR_BILL",
        };
        f.write_str(name)
    }
}

/// A seating unit with a fixed capacity and at most one open order.
///
/// # State Machine
///
/// ```text
/// FREE --seat--> OCCUPIED --open_new_order--> OCCUPIED + order
///      --request_bill--> WAITING_FOR_BILL --clear--> FREE
/// ```
///
/// The order is only ever present while the table is `OCCUPIED` or
/// `WAITING_FOR_BILL`; [`Table::clear`] drops it together with the seating.
#[derive(Debug, Clone)]
pub struct Table {
    number: TableNumber,
    capacity: u32,
    status: TableStatus,
    current_order: Option<SharedOrder>,
}

impl Table {
    /// Creates a free table without an order.
    ///
    /// # Errors
    /// `InvalidArgument` if `capacity` is zero.
    pub fn new(number: impl Into<TableNumber>, capacity: u32) -> Result<Self> {
        let number = number.into();
        if capacity == 0 {
            return Err(RestaurantError::InvalidArgument(format!(
                "{number} capacity must be positive"
            )));
        }
        Ok(Self {
            number,
            capacity,
            status: TableStatus::Free,
            current_order: None,
        })
    }

    pub fn number(&self) -> TableNumber {
        self.number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn order(&self) -> Option<&SharedOrder> {
        self.current_order.as_ref()
    }

    pub fn has_order(&self) -> bool {
        self.current_order.is_some()
    }

    /// Seats `customers` guests and marks the table `OCCUPIED`.
    ///
    /// Re-seating an occupied table is allowed and leaves any open order alone.
    pub fn seat(&mut self, customers: u32) -> Result<()> {
        if customers == 0 {
            return Err(RestaurantError::InvalidArgument(format!(
                "cannot seat zero customers at {}",
                self.number
            )));
        }
        if customers > self.capacity {
            return Err(RestaurantError::InvalidArgument(format!(
                "{customers} customers exceed {} capacity of {}",
                self.number, self.capacity
            )));
        }
        self.status = next_table_status(TableEvent::Seat, self.number, self.status)?;
        Ok(())
    }

    /// Opens a new, empty order for the seated party.
    pub fn open_new_order(&mut self) -> Result<&SharedOrder> {
        let next = next_table_status(TableEvent::OpenOrder, self.number, self.status)?;
        if self.current_order.is_some() {
            return Err(RestaurantError::InvalidState(format!(
                "{} already has an open order",
                self.number
            )));
        }
        self.status = next;
        Ok(&*self.current_order.insert(Order::new().shared()))
    }

    /// Moves the table to `WAITING_FOR_BILL`.
    ///
    /// Only the presence of a non-empty order is checked, not whether the kitchen
    /// has served it.
    pub fn request_bill(&mut self) -> Result<()> {
        let next = next_table_status(TableEvent::RequestBill, self.number, self.status)?;
        let has_items = self
            .current_order
            .as_ref()
            .is_some_and(|order| !order.borrow().is_empty());
        if !has_items {
            return Err(RestaurantError::InvalidState(format!(
                "{} cannot request a bill without an order",
                self.number
            )));
        }
        self.status = next;
        Ok(())
    }

    /// Current bill: the open order's total, or zero without an order.
    pub fn bill(&self) -> Decimal {
        self.current_order
            .as_ref()
            .map_or(Decimal::ZERO, |order| order.borrow().total_price())
    }

    /// Resets the table to `FREE` and lets go of its order.
    pub fn clear(&mut self) {
        self.status = TableStatus::Free;
        self.current_order = None;
    }
}

impl Entity for Table {
    type Id = TableNumber;

    fn id(&self) -> TableNumber {
        self.number
    }
}
