//! Intents: the only way to request a state change.

use crate::model::{DishId, NewComment};

/// A requested state change.
///
/// Intents are fire-and-forget: the caller observes the outcome by reading
/// the next state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Mark a dish as favorite.
    AddFavorite {
        /// Dish to favorite.
        dish_id: DishId,
    },
    /// Append a comment.
    AddComment(NewComment),
}
