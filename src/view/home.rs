//! Home view: the featured dish.

use crate::model::Dish;
use crate::store::StoreState;

/// Home screen. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeView;

impl HomeView {
    /// The dish promoted on the home screen.
    pub fn featured(self, state: &StoreState) -> Option<&Dish> {
        state.catalog().featured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::store::Store;

    #[test]
    fn test_featured_dish() {
        let data = Dataset::embedded().unwrap();
        let store = Store::new(data.catalog, data.comments);
        let dish = HomeView.featured(store.state()).unwrap();
        assert!(dish.featured);
        assert_eq!(dish.name, "Uthappizza");
    }

    #[test]
    fn test_no_featured_dish() {
        assert!(HomeView.featured(&StoreState::default()).is_none());
    }
}
