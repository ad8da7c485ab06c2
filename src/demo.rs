//! Built-in demo menu and floor plan.

use crate::error::Result;
use crate::model::{Dish, Table};
use crate::restaurant::{Menu, Restaurant};
use rust_decimal::Decimal;

/// `(id, name, price, prep_time_minutes)`
const DISHES: [(u32, &str, i64, u32); 7] = [
    (1, "Margherita Pizza", 48, 15),
    (2, "Pasta Alfredo", 54, 18),
    (3, "Greek Salad", 34, 7),
    (4, "Cheeseburger", 59, 14),
    (5, "French Fries", 18, 6),
    (6, "Cola", 12, 1),
    (7, "Ice Cream", 22, 3),
];

/// `(number, capacity)`
const TABLES: [(u32, u32); 5] = [(1, 2), (2, 4), (3, 4), (4, 6), (5, 8)];

pub fn dishes() -> Result<Vec<Dish>> {
    DISHES
        .iter()
        .map(|&(id, name, price, prep)| Dish::new(id, name, Decimal::from(price), prep))
        .collect()
}

pub fn tables() -> Result<Vec<Table>> {
    TABLES
        .iter()
        .map(|&(number, capacity)| Table::new(number, capacity))
        .collect()
}

pub fn menu() -> Result<Menu> {
    let mut menu = Menu::new();
    for dish in dishes()? {
        menu.add_dish(dish)?;
    }
    Ok(menu)
}

/// The demo menu plus five free tables.
pub fn restaurant() -> Result<Restaurant> {
    let mut restaurant = Restaurant::new(menu()?);
    for table in tables()? {
        restaurant.add_table(table)?;
    }
    Ok(restaurant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishId, TableNumber, TableStatus};

    #[test]
    fn demo_restaurant_is_complete() {
        let restaurant = restaurant().unwrap();
        assert_eq!(restaurant.menu().len(), 7);
        assert_eq!(restaurant.len(), 5);
        assert_eq!(
            restaurant.menu().get_dish(DishId(1)).unwrap().price(),
            Decimal::from(48)
        );
        assert!(restaurant
            .list_tables()
            .all(|table| table.status() == TableStatus::Free));
        assert_eq!(restaurant.get_table(TableNumber(5)).unwrap().capacity(), 8);
    }
}
