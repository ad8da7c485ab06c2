use crate::error::Result;
use crate::model::{TableNumber, TableStatus};
use crate::restaurant::Restaurant;

/// Read-only occupancy queries over the restaurant's tables.
#[derive(Debug, Clone, Copy)]
pub struct TableService<'a> {
    restaurant: &'a Restaurant,
}

impl<'a> TableService<'a> {
    pub fn new(restaurant: &'a Restaurant) -> Self {
        Self { restaurant }
    }

    pub fn status(&self, number: TableNumber) -> Result<TableStatus> {
        Ok(self.restaurant.get_table(number)?.status())
    }

    /// Whether guests are seated and have not yet asked for the bill.
    pub fn is_taken(&self, number: TableNumber) -> Result<bool> {
        Ok(self.status(number)? == TableStatus::Occupied)
    }

    pub fn table_count(&self) -> usize {
        self.restaurant.len()
    }
}
