//! Views: per-screen state and the operations users trigger on it.
//!
//! Views read the store through [`crate::store::StoreState`] and request
//! changes with [`crate::store::Store::dispatch`]. They hold only transient
//! UI state (selection, scroll, form contents).

mod detail;
mod form;
mod home;
mod menu;

pub use detail::{comments_for, DetailParams, DetailSnapshot, DetailView};
pub use form::{CommentDraft, CommentForm, FormField, FormOutcome, FormVisibility};
pub use home::HomeView;
pub use menu::{MenuAction, MenuView};
