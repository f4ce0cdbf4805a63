//! `TerminalSession`: raw mode and alternate screen, restored on drop.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;

/// Terminal setup options.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
    /// How long the input thread waits per poll.
    pub input_poll_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            input_poll_timeout: Duration::from_millis(10),
        }
    }
}

/// An active terminal session. Dropping it restores the terminal.
#[derive(Debug)]
pub struct TerminalSession {
    config: SessionConfig,
}

impl TerminalSession {
    /// Enter raw mode (and the alternate screen if configured).
    pub fn enter(config: SessionConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;
        tracing::debug!(alternate_screen = config.alternate_screen, "terminal session entered");
        Ok(Self { config })
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Session options.
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.config.alternate_screen);
    }
}

/// Best-effort terminal restore. Also used from the panic hook.
pub fn restore(alternate_screen: bool) {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show);
    if alternate_screen {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    let _ = terminal::disable_raw_mode();
}
