//! # Menuboard
//!
//! A terminal restaurant-menu browser: a home screen with the featured dish,
//! the full menu, and a detail screen per dish where users mark favorites and
//! leave rated comments.
//!
//! ## Core Concepts
//!
//! - **Store**: dishes, favorites and comments live in one [`store::Store`];
//!   the only way to change them is [`store::Store::dispatch`].
//! - **Views**: [`view::DetailView`] and friends read a state snapshot and
//!   dispatch intents. They never touch the slices directly.
//! - **Navigator**: a drawer of Home and Menu, each with its own route stack.
//! - **Canvas rendering**: every frame is composed on a [`Canvas`] and only
//!   changed rows are written to the terminal.
//! - **Input actor**: a dedicated thread polls the terminal and forwards
//!   events over a channel; all state lives on the main thread.
//!
//! ## Example
//!
//! ```rust
//! use menuboard::dataset::Dataset;
//! use menuboard::store::Store;
//! use menuboard::view::{DetailParams, DetailView};
//!
//! let data = Dataset::embedded()?;
//! let mut store = Store::new(data.catalog, data.comments);
//!
//! let view = DetailView::new(DetailParams::new("2"));
//! assert_eq!(view.snapshot(store.state()).dish.map(|d| d.name.as_str()), Some("Vadonut"));
//!
//! view.mark_favorite(&mut store);
//! assert!(view.snapshot(store.state()).favorite);
//! # Ok::<(), menuboard::dataset::DatasetError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod buffer;
pub mod config;
pub mod dataset;
mod error;
pub mod layout;
pub mod model;
pub mod nav;
mod screen;
pub mod store;
pub mod telemetry;
pub mod terminal;
pub mod view;
pub mod widget;

// Re-exports for convenience
pub use app::{App, Control};
pub use buffer::{Canvas, Cell, Modifiers, Rgb, Style};
pub use error::{Error, Result};
pub use layout::Rect;
pub use actor::{InputEvent, KeyCode, KeyModifiers};
pub use screen::{format_date, Theme};
