//! The restaurant aggregate: one menu plus the table layout.

pub mod menu;

pub use menu::Menu;

use crate::error::Result;
use crate::model::{Table, TableNumber};
use resource_store::KeyedStore;

/// Owns the menu and every table. Tables are listed in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Restaurant {
    menu: Menu,
    tables: KeyedStore<Table>,
}

impl Restaurant {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            tables: KeyedStore::new(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    /// Adds a table to the layout.
    ///
    /// # Errors
    /// `DuplicateKey` if the table number is taken.
    pub fn add_table(&mut self, table: Table) -> Result<TableNumber> {
        Ok(self.tables.insert(table)?)
    }

    pub fn get_table(&self, number: TableNumber) -> Result<&Table> {
        Ok(self.tables.get(&number)?)
    }

    pub fn get_table_mut(&mut self, number: TableNumber) -> Result<&mut Table> {
        Ok(self.tables.get_mut(&number)?)
    }

    pub fn list_tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.tables.iter()
    }

    pub fn remove_table(&mut self, number: TableNumber) -> bool {
        self.tables.remove(&number).is_some()
    }

    pub fn contains_table(&self, number: TableNumber) -> bool {
        self.tables.contains(&number)
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
