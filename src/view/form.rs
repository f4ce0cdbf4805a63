//! Comment form: the modal that collects a rating, author and comment.
//!
//! Visibility is a two-state machine:
//!
//! ```text
//!            open
//!   Hidden ────────▶ Visible
//!      ▲                │
//!      └── submit ──────┤
//!      └── cancel ──────┘
//! ```
//!
//! Leaving `Visible` by either edge resets every field to its default.

use crate::actor::{InputEvent, KeyCode};
use crate::model::Rating;
use crate::widget::{RatingInput, TextInput, TextInputConfig, Widget};

/// Whether the form is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVisibility {
    /// Not shown. Initial state.
    #[default]
    Hidden,
    /// Shown and accepting input.
    Visible,
}

/// Focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Star picker.
    #[default]
    Rating,
    /// Author text field.
    Author,
    /// Comment text field.
    Comment,
    /// Submit button.
    Submit,
    /// Cancel button.
    Cancel,
}

impl FormField {
    const ORDER: [Self; 5] = [
        Self::Rating,
        Self::Author,
        Self::Comment,
        Self::Submit,
        Self::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous field, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What the form made of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Not for the form (it is hidden, or the key is unbound).
    Ignored,
    /// Handled inside the form.
    Consumed,
    /// The user asked to submit.
    Submit,
    /// The user asked to cancel.
    Cancel,
}

/// The values a submission carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    /// Chosen rating.
    pub rating: Rating,
    /// Author text.
    pub author: String,
    /// Comment text.
    pub comment: String,
}

/// Transient state of the comment modal.
#[derive(Debug, Clone)]
pub struct CommentForm {
    visibility: FormVisibility,
    focus: FormField,
    rating: RatingInput,
    author: TextInput,
    comment: TextInput,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentForm {
    /// A hidden form with default values.
    pub fn new() -> Self {
        let mut form = Self {
            visibility: FormVisibility::Hidden,
            focus: FormField::Rating,
            rating: RatingInput::new(),
            author: TextInput::new(TextInputConfig {
                prompt: "Author  ".into(),
                placeholder: "Author".into(),
                ..TextInputConfig::default()
            }),
            comment: TextInput::new(TextInputConfig {
                prompt: "Comment ".into(),
                placeholder: "Comment".into(),
                ..TextInputConfig::default()
            }),
        };
        form.apply_focus();
        form
    }

    /// Current visibility.
    pub const fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    /// Shorthand for `visibility() == Visible`.
    pub const fn is_visible(&self) -> bool {
        matches!(self.visibility, FormVisibility::Visible)
    }

    /// Hidden → Visible. No effect when already visible.
    pub fn open(&mut self) {
        if !self.is_visible() {
            self.visibility = FormVisibility::Visible;
            tracing::debug!("comment form opened");
        }
    }

    /// Visible → Hidden, restoring every field to its default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot of the entered values.
    pub fn draft(&self) -> CommentDraft {
        CommentDraft {
            rating: self.rating.rating(),
            author: self.author.content().to_string(),
            comment: self.comment.content().to_string(),
        }
    }

    /// Focused field.
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Move focus to `field`.
    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
        self.apply_focus();
    }

    /// Set the rating.
    pub const fn set_rating(&mut self, rating: Rating) {
        self.rating.set_rating(rating);
    }

    /// Replace the author text.
    pub fn set_author(&mut self, author: &str) {
        self.author.set_content(author);
    }

    /// Replace the comment text.
    pub fn set_comment(&mut self, comment: &str) {
        self.comment.set_content(comment);
    }

    /// The star picker.
    pub const fn rating_input(&self) -> &RatingInput {
        &self.rating
    }

    /// The author field.
    pub const fn author_input(&self) -> &TextInput {
        &self.author
    }

    /// The comment field.
    pub const fn comment_input(&self) -> &TextInput {
        &self.comment
    }

    fn apply_focus(&mut self) {
        self.rating.set_focused(self.focus == FormField::Rating);
        self.author.set_focused(self.focus == FormField::Author);
        self.comment.set_focused(self.focus == FormField::Comment);
    }

    /// Route an input event. Hidden forms ignore everything.
    pub fn handle_input(&mut self, event: &InputEvent) -> FormOutcome {
        if !self.is_visible() {
            return FormOutcome::Ignored;
        }

        if let InputEvent::Key { code, .. } = event {
            match code {
                KeyCode::Esc => return FormOutcome::Cancel,
                KeyCode::Enter => {
                    return match self.focus {
                        FormField::Cancel => FormOutcome::Cancel,
                        _ => FormOutcome::Submit,
                    };
                }
                KeyCode::Tab | KeyCode::Down => {
                    self.set_focus(self.focus.next());
                    return FormOutcome::Consumed;
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.set_focus(self.focus.prev());
                    return FormOutcome::Consumed;
                }
                KeyCode::Left | KeyCode::Right
                    if matches!(self.focus, FormField::Submit | FormField::Cancel) =>
                {
                    let other = if self.focus == FormField::Submit {
                        FormField::Cancel
                    } else {
                        FormField::Submit
                    };
                    self.set_focus(other);
                    return FormOutcome::Consumed;
                }
                _ => {}
            }
        }

        let widget: &mut dyn Widget = match self.focus {
            FormField::Rating => &mut self.rating,
            FormField::Author => &mut self.author,
            FormField::Comment => &mut self.comment,
            FormField::Submit | FormField::Cancel => return FormOutcome::Ignored,
        };
        if widget.handle_input(event) {
            FormOutcome::Consumed
        } else {
            FormOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::key(code)
    }

    #[test]
    fn test_initial_state() {
        let form = CommentForm::new();
        assert_eq!(form.visibility(), FormVisibility::Hidden);
        assert_eq!(form.draft().rating, Rating::MAX);
        assert!(form.draft().author.is_empty());
    }

    #[test]
    fn test_hidden_ignores_input() {
        let mut form = CommentForm::new();
        assert_eq!(form.handle_input(&key(KeyCode::Enter)), FormOutcome::Ignored);
        assert_eq!(form.handle_input(&key(KeyCode::Esc)), FormOutcome::Ignored);
    }

    #[test]
    fn test_open_is_idempotent_and_keeps_values() {
        let mut form = CommentForm::new();
        form.open();
        form.set_author("Ada");
        form.open();
        assert!(form.is_visible());
        assert_eq!(form.draft().author, "Ada");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = CommentForm::new();
        form.open();
        form.set_author("Ada");
        form.set_comment("Great");
        form.set_rating(Rating::MIN);
        form.set_focus(FormField::Submit);

        form.reset();
        assert_eq!(form.visibility(), FormVisibility::Hidden);
        assert_eq!(form.focus(), FormField::Rating);
        assert_eq!(
            form.draft(),
            CommentDraft {
                rating: Rating::MAX,
                author: String::new(),
                comment: String::new(),
            }
        );
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = CommentForm::new();
        form.open();
        form.handle_input(&key(KeyCode::Left));
        form.handle_input(&key(KeyCode::Tab));
        for c in "Bo".chars() {
            assert_eq!(form.handle_input(&key(KeyCode::Char(c))), FormOutcome::Consumed);
        }
        form.handle_input(&key(KeyCode::Tab));
        form.handle_input(&InputEvent::Paste("Nice".into()));

        let draft = form.draft();
        assert_eq!(draft.rating.stars(), 4);
        assert_eq!(draft.author, "Bo");
        assert_eq!(draft.comment, "Nice");
    }

    #[test]
    fn test_enter_and_escape() {
        let mut form = CommentForm::new();
        form.open();
        assert_eq!(form.handle_input(&key(KeyCode::Enter)), FormOutcome::Submit);
        form.set_focus(FormField::Cancel);
        assert_eq!(form.handle_input(&key(KeyCode::Enter)), FormOutcome::Cancel);
        assert_eq!(form.handle_input(&key(KeyCode::Left)), FormOutcome::Consumed);
        assert_eq!(form.focus(), FormField::Submit);
        assert_eq!(form.handle_input(&key(KeyCode::Esc)), FormOutcome::Cancel);
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(FormField::Cancel.next(), FormField::Rating);
        assert_eq!(FormField::Rating.prev(), FormField::Cancel);
    }
}
