//! Domain records: dishes and the comments attached to them.
//!
//! Both are plain data. Ownership lives in [`crate::store`]; views only ever
//! borrow them.

mod comment;
mod dish;

pub use comment::{Comment, CommentId, NewComment, Rating, RatingOutOfRange};
pub use dish::{Dish, DishId};
