//! FavoriteSet: dish ids the user has marked.

use crate::model::DishId;
use std::collections::BTreeSet;

/// Set of favorited dishes. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<DishId>,
}

impl FavoriteSet {
    /// Whether `id` is a favorite.
    #[inline]
    pub fn contains(&self, id: DishId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of favorites.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no favorites.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorites in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = DishId> + '_ {
        self.ids.iter().copied()
    }

    /// Add a favorite. Returns `false` if it was already present.
    pub(super) fn reduce(&mut self, id: DishId) -> bool {
        let added = self.ids.insert(id);
        if added {
            tracing::info!(dish = %id, "favorite added");
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_readd() {
        let mut set = FavoriteSet::default();
        assert!(!set.contains(DishId(2)));
        assert!(set.reduce(DishId(2)));
        assert!(set.contains(DishId(2)));

        let before = set.clone();
        assert!(!set.reduce(DishId(2)));
        assert_eq!(set, before);
    }

    #[test]
    fn test_iter_sorted() {
        let mut set = FavoriteSet::default();
        set.reduce(DishId(3));
        set.reduce(DishId(0));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![DishId(0), DishId(3)]);
    }
}
