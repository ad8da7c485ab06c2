use crate::error::{RestaurantError, Result};
use resource_store::Entity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u32);

impl From<u32> for DishId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dish_{}", self.0)
    }
}

/// A catalog item with a price and preparation time.
///
/// Dishes are created once when the menu is loaded and never change afterwards.
/// Order lines hold a shared, read-only handle to the menu's copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DishCreate")]
pub struct Dish {
    id: DishId,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    prep_time_minutes: u32,
}

impl Dish {
    /// Creates a new Dish.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within a menu
    /// * `name` - Display name, must not be blank
    /// * `price` - Unit price, must not be negative
    /// * `prep_time_minutes` - Kitchen preparation time
    pub fn new(
        id: impl Into<DishId>,
        name: impl Into<String>,
        price: Decimal,
        prep_time_minutes: u32,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RestaurantError::InvalidArgument(format!(
                "{id} must have a name"
            )));
        }
        if price < Decimal::ZERO {
            return Err(RestaurantError::InvalidArgument(format!(
                "{id} price cannot be negative: {price}"
            )));
        }
        Ok(Self {
            id,
            name,
            price,
            prep_time_minutes,
        })
    }

    pub fn id(&self) -> DishId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn prep_time_minutes(&self) -> u32 {
        self.prep_time_minutes
    }
}

impl Entity for Dish {
    type Id = DishId;

    fn id(&self) -> DishId {
        self.id
    }
}

/// Payload for loading a dish from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DishCreate {
    pub id: DishId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub prep_time_minutes: u32,
}

impl TryFrom<DishCreate> for Dish {
    type Error = RestaurantError;

    fn try_from(params: DishCreate) -> Result<Self> {
        Dish::new(params.id, params.name, params.price, params.prep_time_minutes)
    }
}
