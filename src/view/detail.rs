//! Dish detail view: one dish, its favorite flag and its comment thread.

use super::form::{CommentForm, FormOutcome};
use crate::actor::{InputEvent, KeyCode};
use crate::model::{Comment, Dish, DishId, NewComment};
use crate::store::{Intent, Store, StoreState};

/// Navigation parameters for the detail route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailParams {
    /// Dish id as passed through navigation. Parsed leniently.
    pub dish_id: String,
}

impl DetailParams {
    /// Params for an arbitrary id string.
    pub fn new(dish_id: impl Into<String>) -> Self {
        Self {
            dish_id: dish_id.into(),
        }
    }

    /// Params pointing at `id`.
    pub fn for_dish(id: DishId) -> Self {
        Self::new(id.to_string())
    }
}

/// Everything the detail screen renders, resolved against one state.
#[derive(Debug, Clone)]
pub struct DetailSnapshot<'s> {
    /// The dish, or `None` when the id did not resolve.
    pub dish: Option<&'s Dish>,
    /// Whether the dish is a favorite.
    pub favorite: bool,
    /// Comments for the dish, in submission order.
    pub comments: Vec<&'s Comment>,
}

/// Comments whose dish id is exactly `dish_id`, keeping their order.
pub fn comments_for(comments: &[Comment], dish_id: DishId) -> Vec<&Comment> {
    comments.iter().filter(|c| c.dish_id == dish_id).collect()
}

/// Detail view state.
#[derive(Debug, Clone)]
pub struct DetailView {
    params: DetailParams,
    dish_id: Option<DishId>,
    form: CommentForm,
    scroll: u16,
}

impl DetailView {
    /// Create the view for a navigation parameter.
    pub fn new(params: DetailParams) -> Self {
        let dish_id = DishId::parse_param(&params.dish_id);
        if dish_id.is_none() {
            tracing::debug!(param = %params.dish_id, "dish parameter is not an index");
        }
        Self {
            params,
            dish_id,
            form: CommentForm::new(),
            scroll: 0,
        }
    }

    /// The parameters this view was opened with.
    pub const fn params(&self) -> &DetailParams {
        &self.params
    }

    /// Parsed dish id, if the parameter was numeric.
    pub const fn dish_id(&self) -> Option<DishId> {
        self.dish_id
    }

    /// Resolve the dish, favorite flag and comments from `state`.
    ///
    /// Ids outside the catalog resolve to no dish and no comments.
    pub fn snapshot<'s>(&self, state: &'s StoreState) -> DetailSnapshot<'s> {
        let dish = self.dish_id.and_then(|id| state.catalog().get(id));
        match dish {
            Some(dish) => DetailSnapshot {
                dish: Some(dish),
                favorite: state.favorites().contains(dish.id),
                comments: comments_for(state.comments(), dish.id),
            },
            None => DetailSnapshot {
                dish: None,
                favorite: false,
                comments: Vec::new(),
            },
        }
    }

    /// Ask the store to favorite this dish.
    ///
    /// An already-favorited dish is logged and not dispatched again.
    pub fn mark_favorite(&self, store: &mut Store) {
        let Some(dish_id) = self.resolved(store.state()) else {
            tracing::debug!(param = %self.params.dish_id, "no dish to favorite");
            return;
        };
        if store.state().favorites().contains(dish_id) {
            tracing::info!(dish = %dish_id, "already favorite");
            return;
        }
        store.dispatch(Intent::AddFavorite { dish_id });
    }

    /// The comment form.
    pub const fn form(&self) -> &CommentForm {
        &self.form
    }

    /// Mutable access to the comment form, for filling it in.
    pub fn form_mut(&mut self) -> &mut CommentForm {
        &mut self.form
    }

    /// Show the comment form. Needs a resolved dish.
    pub fn open_comment_form(&mut self, state: &StoreState) {
        if self.resolved(state).is_some() {
            self.form.open();
        }
    }

    /// Dismiss the form, discarding what was entered.
    pub fn cancel_comment_form(&mut self) {
        if self.form.is_visible() {
            tracing::debug!("comment form cancelled");
        }
        self.form.reset();
    }

    /// Dispatch the form's contents as a new comment, then reset the form.
    pub fn submit_comment(&mut self, store: &mut Store) {
        let draft = self.form.draft();
        if let Some(dish_id) = self.resolved(store.state()) {
            if draft.author.trim().is_empty() || draft.comment.trim().is_empty() {
                tracing::debug!(dish = %dish_id, "submitting comment with empty fields");
            }
            store.dispatch(Intent::AddComment(NewComment {
                dish_id,
                rating: draft.rating,
                author: draft.author,
                comment: draft.comment,
            }));
        }
        self.form.reset();
    }

    /// Scroll offset of the dish/comment column.
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Move the scroll offset by `delta` lines, kept within `0..=max`.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = i32::from(self.scroll).saturating_add(delta).clamp(0, i32::from(max));
        self.scroll = u16::try_from(next).unwrap_or(max);
    }

    /// Handle view-level keys and anything for the open form.
    ///
    /// Returns `true` if the event was consumed. Scrolling is left to the
    /// caller, which knows the viewport.
    pub fn handle_input(&mut self, event: &InputEvent, store: &mut Store) -> bool {
        if self.form.is_visible() {
            return match self.form.handle_input(event) {
                FormOutcome::Submit => {
                    self.submit_comment(store);
                    true
                }
                FormOutcome::Cancel => {
                    self.cancel_comment_form();
                    true
                }
                // Unbound keys stay inside the modal.
                FormOutcome::Consumed | FormOutcome::Ignored => true,
            };
        }

        match event {
            InputEvent::Key {
                code: KeyCode::Char('f'),
                ..
            } => {
                self.mark_favorite(store);
                true
            }
            InputEvent::Key {
                code: KeyCode::Char('c'),
                ..
            } => {
                self.open_comment_form(store.state());
                true
            }
            _ => false,
        }
    }

    fn resolved(&self, state: &StoreState) -> Option<DishId> {
        self.dish_id
            .filter(|id| state.catalog().get(*id).is_some())
    }
}
