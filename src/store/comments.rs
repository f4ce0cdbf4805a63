//! CommentLog: append-only list of comments.

use crate::dataset::DatasetError;
use crate::model::{Comment, CommentId, NewComment};
use time::OffsetDateTime;

/// Comments in submission order.
///
/// Ids are handed out one past the largest id seen, so they stay unique even
/// when a loaded dataset has gaps. `u32::MAX` is never assigned; once the
/// next id would reach it the log stops accepting comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentLog {
    comments: Vec<Comment>,
    next_id: u32,
}

impl CommentLog {
    /// Start a log from existing comments.
    ///
    /// Fails when a comment already carries `u32::MAX`, since no id could
    /// follow it.
    pub fn new(comments: Vec<Comment>) -> Result<Self, DatasetError> {
        let mut next_id = 0;
        for comment in &comments {
            let after = comment
                .id
                .0
                .checked_add(1)
                .ok_or(DatasetError::CommentIdOverflow { id: comment.id })?;
            next_id = next_id.max(after);
        }
        Ok(Self { comments, next_id })
    }

    /// All comments.
    #[inline]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments.
    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Whether the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Append a comment, assigning its id. Returns `None`, leaving the log
    /// untouched, when the id space is used up.
    pub(super) fn reduce(&mut self, new: NewComment, date: OffsetDateTime) -> Option<CommentId> {
        let id = CommentId(self.next_id);
        self.next_id = self.next_id.checked_add(1)?;
        self.comments.push(Comment {
            id,
            dish_id: new.dish_id,
            rating: new.rating,
            comment: new.comment,
            author: new.author,
            date,
        });
        Some(id)
    }
}
