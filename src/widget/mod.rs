//! Widgets: reusable pieces the screens are built from.
//!
//! - [`TextInput`]: single-line editable field
//! - [`RatingInput`]: 1-5 star picker
//! - [`HeaderBar`]: three-section title bar
//! - [`text`]: word wrapping and truncation helpers

mod header;
mod rating;
pub mod text;
mod text_input;
mod traits;

pub use header::{HeaderBar, HeaderBarConfig};
pub use rating::{stars, RatingInput};
pub use text_input::{TextInput, TextInputConfig};
pub use traits::Widget;
