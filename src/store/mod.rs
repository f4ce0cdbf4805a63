//! Store: unidirectional state container for the menu.
//!
//! The store owns three slices of state and applies [`Intent`]s to them.
//! Views read through [`StoreState`] and request changes through
//! [`Store::dispatch`]; nothing else mutates the slices.
//!
//! ```text
//!  ┌────────────┐   Intent    ┌─────────────────────────────┐
//!  │    View    │ ──────────▶ │ Store::dispatch             │
//!  └────────────┘             │  ├─ FavoriteSet::reduce      │
//!        ▲                    │  └─ CommentLog::reduce       │
//!        │   &StoreState      └─────────────────────────────┘
//!        └───────────────────────────────┘
//! ```

mod catalog;
mod clock;
mod comments;
mod favorites;
mod intent;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use comments::CommentLog;
pub use favorites::FavoriteSet;
pub use intent::Intent;

use crate::model::{Comment, Dish};

/// Read-only view over every slice of state.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    catalog: Catalog,
    favorites: FavoriteSet,
    comments: CommentLog,
}

impl StoreState {
    /// Build state from its slices.
    pub const fn new(catalog: Catalog, favorites: FavoriteSet, comments: CommentLog) -> Self {
        Self {
            catalog,
            favorites,
            comments,
        }
    }

    /// All dishes, in catalog order.
    pub fn dishes(&self) -> &[Dish] {
        self.catalog.dishes()
    }

    /// The catalog slice.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Favorited dish ids.
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// All comments, in submission order.
    pub fn comments(&self) -> &[Comment] {
        self.comments.comments()
    }
}

/// The application store.
pub struct Store {
    state: StoreState,
    clock: Box<dyn Clock>,
}

impl Store {
    /// Create a store stamping comments with the system clock.
    pub fn new(catalog: Catalog, comments: CommentLog) -> Self {
        Self::with_clock(catalog, comments, Box::new(SystemClock))
    }

    /// Create a store with a custom clock.
    pub fn with_clock(catalog: Catalog, comments: CommentLog, clock: Box<dyn Clock>) -> Self {
        Self {
            state: StoreState::new(catalog, FavoriteSet::default(), comments),
            clock,
        }
    }

    /// Current state snapshot.
    #[inline]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply an intent.
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let changed = match intent {
            Intent::AddFavorite { dish_id } => self.state.favorites.reduce(dish_id),
            Intent::AddComment(new) => {
                let date = self.clock.now();
                match self.state.comments.reduce(new, date) {
                    Some(id) => {
                        tracing::info!(comment = %id, "comment added");
                        true
                    }
                    None => {
                        tracing::warn!("comment ids exhausted, comment dropped");
                        false
                    }
                }
            }
        };
        tracing::debug!(changed, "intent applied");
        changed
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("dishes", &self.state.dishes().len())
            .field("favorites", &self.state.favorites().len())
            .field("comments", &self.state.comments().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommentId, DishId, NewComment, Rating};
    use time::macros::datetime;

    fn dish(id: u32) -> Dish {
        Dish {
            id: DishId(id),
            name: format!("Dish {id}"),
            description: String::new(),
            image: String::new(),
            category: "mains".into(),
            featured: false,
            price: "1.00".into(),
            label: String::new(),
        }
    }

    fn store() -> Store {
        let catalog = Catalog::new((0..3).map(dish).collect()).unwrap();
        let clock = FixedClock::new(datetime!(2020-01-02 03:04 UTC));
        Store::with_clock(catalog, CommentLog::default(), Box::new(clock))
    }

    #[test]
    fn test_dispatch_favorite_is_idempotent() {
        let mut store = store();
        assert!(!store.state().favorites().contains(DishId(1)));

        assert!(store.dispatch(Intent::AddFavorite { dish_id: DishId(1) }));
        assert!(store.state().favorites().contains(DishId(1)));

        assert!(!store.dispatch(Intent::AddFavorite { dish_id: DishId(1) }));
        assert_eq!(store.state().favorites().len(), 1);
    }

    #[test]
    fn test_dispatch_comment_stamps_clock() {
        let mut store = store();
        let changed = store.dispatch(Intent::AddComment(NewComment {
            dish_id: DishId(2),
            rating: Rating::try_from(4).unwrap(),
            author: "Ada".into(),
            comment: "Lovely".into(),
        }));

        assert!(changed);
        let comments = store.state().comments();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].date, datetime!(2020-01-02 03:04 UTC));
        assert_eq!(comments[0].author, "Ada");
    }

    #[test]
    fn test_dispatch_comment_when_ids_exhausted() {
        let catalog = Catalog::new((0..3).map(dish).collect()).unwrap();
        let seed = Comment {
            id: CommentId(u32::MAX - 1),
            dish_id: DishId(0),
            rating: Rating::default(),
            comment: "seed".into(),
            author: String::new(),
            date: datetime!(2019-01-01 00:00 UTC),
        };
        let log = CommentLog::new(vec![seed]).unwrap();
        let clock = FixedClock::new(datetime!(2020-01-02 03:04 UTC));
        let mut store = Store::with_clock(catalog, log, Box::new(clock));

        let changed = store.dispatch(Intent::AddComment(NewComment {
            dish_id: DishId(0),
            rating: Rating::default(),
            author: "Ada".into(),
            comment: "dropped".into(),
        }));

        assert!(!changed);
        assert_eq!(store.state().comments().len(), 1);
    }
}
