//! Actor: the input thread and the messages it sends.
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │  Main Loop   │ ── owns Store, views
//! └──────────────┘   crossbeam chan    └──────────────┘
//! ```
//!
//! The input thread only converts terminal events. Every state change happens
//! on the main loop, one event at a time.

mod input;
mod messages;

pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
