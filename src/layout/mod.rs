//! Layout module: rectangle arithmetic for carving up the screen.

mod rect;

pub use rect::Rect;
