//! Comment: a rated review attached to a dish.

use super::DishId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use time::OffsetDateTime;

/// Identifier of a comment. Unique within a comment log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u32);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

/// Returned when a rating falls outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside 1..=5")]
pub struct RatingOutOfRange(pub u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: Self = Self(1);
    /// Highest rating, also the default.
    pub const MAX: Self = Self(5);

    const REVIEWS: [&'static str; 5] = ["Bad", "OK", "Good", "Very Good", "Amazing"];

    /// Number of stars.
    #[inline]
    pub const fn stars(self) -> u8 {
        self.0
    }

    /// Human review label for this rating.
    pub const fn review(self) -> &'static str {
        Self::REVIEWS[(self.0 - 1) as usize]
    }

    /// One star more, saturating at 5.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 < 5 {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// One star less, saturating at 1.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 > 1 {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique id, assigned by the comment log.
    pub id: CommentId,
    /// Dish the comment belongs to. Not checked against the catalog.
    pub dish_id: DishId,
    /// Star rating.
    pub rating: Rating,
    /// Free-form review text.
    pub comment: String,
    /// Author name.
    pub author: String,
    /// Submission time.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The user-supplied part of a comment, before the store assigns an id and
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Dish being reviewed.
    pub dish_id: DishId,
    /// Star rating.
    pub rating: Rating,
    /// Author name, may be empty.
    pub author: String,
    /// Review text, may be empty.
    pub comment: String,
}
