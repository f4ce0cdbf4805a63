//! Terminal module: raw-mode session management and frame output.

mod frame;
mod session;

pub use frame::{FrameStats, FrameWriter};
pub use session::{restore, SessionConfig, TerminalSession};
