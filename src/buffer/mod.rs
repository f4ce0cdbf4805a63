//! Buffer module: the cell grid every screen draws into.
//!
//! - [`Cell`]: one terminal column with its style
//! - [`Canvas`]: a row-major grid of cells plus an optional cursor
//! - [`Style`], [`Rgb`], [`Modifiers`]: presentation attributes

mod canvas;
mod cell;

pub use canvas::Canvas;
pub use cell::{Cell, Modifiers, Rgb, Style};
