//! Catalog: the ordered, read-only dish list.

use crate::dataset::DatasetError;
use crate::model::{Dish, DishId};

/// Dishes in catalog order. A dish's id is its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// Build a catalog, checking that every dish sits at the index its id
    /// names.
    pub fn new(dishes: Vec<Dish>) -> Result<Self, DatasetError> {
        for (index, dish) in dishes.iter().enumerate() {
            if dish.id.index() != index {
                return Err(DatasetError::IdMismatch { index, id: dish.id });
            }
        }
        Ok(Self { dishes })
    }

    /// All dishes.
    #[inline]
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Look up a dish by id. Out-of-range ids yield `None`.
    #[inline]
    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.get(id.index())
    }

    /// The first dish flagged as featured.
    pub fn featured(&self) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.featured)
    }

    /// Number of dishes.
    #[inline]
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Whether the catalog has no dishes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
