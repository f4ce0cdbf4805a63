//! Message types sent from the input thread to the main loop.

/// Keys the menu screens bind. Anything else is dropped by the input thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable character: text entry, or a shortcut (`f`, `c`, `q`, `d`).
    Char(char),
    /// Function key; F2 toggles the drawer.
    F(u8),
    /// Deletes in text fields, goes back elsewhere.
    Backspace,
    /// Opens the selected dish or submits the comment form.
    Enter,
    /// One star less, or cursor left in a text field.
    Left,
    /// One star more, or cursor right in a text field.
    Right,
    /// Previous item, field or line.
    Up,
    /// Next item, field or line.
    Down,
    /// Jump to the start.
    Home,
    /// Jump to the end.
    End,
    /// Scroll up one screen.
    PageUp,
    /// Scroll down one screen.
    PageDown,
    /// Next form field.
    Tab,
    /// Previous form field (Shift+Tab).
    BackTab,
    /// Deletes forward in text fields.
    Delete,
    /// Cancels the form, closes the drawer or goes back.
    Esc,
}

/// Modifier state of a key press. Only Control is bound (Ctrl+C quits);
/// Alt and Control suppress text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift.
    pub shift: bool,
    /// Control.
    pub control: bool,
    /// Alt or Option.
    pub alt: bool,
}

impl KeyModifiers {
    /// Plain key press.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Control held.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };
}

/// What the input thread forwards to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press (releases and repeats are filtered out).
    Key {
        /// Key.
        code: KeyCode,
        /// Modifiers held.
        modifiers: KeyModifiers,
    },
    /// New terminal size; the next frame is redrawn in full.
    Resize {
        /// Columns.
        width: u16,
        /// Rows.
        height: u16,
    },
    /// Bracketed paste, routed to the focused text field.
    Paste(String),
    /// Polling or reading failed; logged and otherwise ignored.
    Error(String),
    /// The input thread stopped.
    Shutdown,
}

impl InputEvent {
    /// A key press without modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A Ctrl+`c` key press.
    pub const fn ctrl(c: char) -> Self {
        Self::Key {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }
}
