use crate::error::Result;
use crate::model::{Dish, DishId};
use resource_store::KeyedStore;
use std::rc::Rc;

/// The restaurant's catalog of dishes, kept in the order they were added.
///
/// Dishes are handed out as `Rc<Dish>` so order lines share the menu's copy.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    dishes: KeyedStore<Rc<Dish>>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dish to the menu.
    ///
    /// # Errors
    /// `DuplicateKey` if a dish with the same id is already listed.
    pub fn add_dish(&mut self, dish: Dish) -> Result<DishId> {
        Ok(self.dishes.insert(Rc::new(dish))?)
    }

    /// Returns a shared handle to the dish, or `NotFound`.
    pub fn get_dish(&self, id: DishId) -> Result<Rc<Dish>> {
        Ok(Rc::clone(self.dishes.get(&id)?))
    }

    pub fn find_dish(&self, id: DishId) -> Option<Rc<Dish>> {
        self.dishes.find(&id).cloned()
    }

    /// All dishes in insertion order.
    pub fn list_dishes(&self) -> impl Iterator<Item = &Dish> + '_ {
        self.dishes.iter().map(|dish| &**dish)
    }

    /// Takes a dish off the menu. Orders that already hold it keep their copy.
    pub fn remove_dish(&mut self, id: DishId) -> bool {
        self.dishes.remove(&id).is_some()
    }

    pub fn contains_dish(&self, id: DishId) -> bool {
        self.dishes.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rust_decimal::Decimal;

    fn dish(id: u32, name: &str, price: i64) -> Dish {
        Dish::new(id, name, Decimal::from(price), 10).unwrap()
    }

    #[test]
    fn added_dishes_are_found_and_ids_stay_unique() {
        let mut menu = Menu::new();
        menu.add_dish(dish(1, "Margherita Pizza", 48)).unwrap();

        let found = menu.get_dish(DishId(1)).unwrap();
        assert_eq!(found.name(), "Margherita Pizza");
        assert_eq!(found.price(), Decimal::from(48));

        let err = menu.add_dish(dish(1, "Other Pizza", 50)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(err.to_string(), "Dish already exists: dish_1");
        assert_eq!(menu.get_dish(DishId(1)).unwrap().name(), "Margherita Pizza");
    }

    #[test]
    fn unknown_dishes_are_not_found() {
        let menu = Menu::new();
        assert_eq!(menu.get_dish(DishId(3)).unwrap_err().kind(), ErrorKind::NotFound);
        assert!(menu.find_dish(DishId(3)).is_none());
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let mut menu = Menu::new();
        menu.add_dish(dish(5, "French Fries", 18)).unwrap();
        menu.add_dish(dish(1, "Margherita Pizza", 48)).unwrap();
        menu.add_dish(dish(3, "Greek Salad", 34)).unwrap();

        let names: Vec<&str> = menu.list_dishes().map(Dish::name).collect();
        assert_eq!(names, ["French Fries", "Margherita Pizza", "Greek Salad"]);

        assert!(menu.remove_dish(DishId(1)));
        assert!(!menu.remove_dish(DishId(1)));
        assert!(!menu.contains_dish(DishId(1)));
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn removed_dishes_survive_in_shared_handles() {
        let mut menu = Menu::new();
        menu.add_dish(dish(6, "Cola", 12)).unwrap();
        let cola = menu.get_dish(DishId(6)).unwrap();

        menu.remove_dish(DishId(6));
        assert!(menu.is_empty());
        assert_eq!(cola.price(), Decimal::from(12));
    }
}
