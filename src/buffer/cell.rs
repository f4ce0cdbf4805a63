//! Cell: the atomic unit of terminal display.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a 24-bit hex color (e.g., 0x512DA8).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        Self::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// # Example
    /// ```
    /// use menuboard::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

/// Foreground, background and modifiers applied to a run of cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// White on black, no modifiers.
    pub const DEFAULT: Self = Self {
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        modifiers: Modifiers::empty(),
    };

    /// Replace the foreground.
    #[must_use]
    pub const fn fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Replace the background.
    #[must_use]
    pub const fn bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Add modifiers.
    #[must_use]
    pub const fn add(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single terminal cell.
///
/// Wide characters occupy two cells: the character itself with width 2,
/// followed by a continuation cell of width 0 that the writer skips.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    symbol: char,
    width: u8,
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell with the default style.
    pub const EMPTY: Self = Self {
        symbol: ' ',
        width: 1,
        style: Style::DEFAULT,
    };

    /// Create a cell for `c`.
    ///
    /// Control characters render as a blank.
    pub fn new(c: char) -> Self {
        match c.width() {
            Some(w) if w > 0 => Self {
                symbol: c,
                width: u8::try_from(w).unwrap_or(1),
                style: Style::DEFAULT,
            },
            _ => Self::EMPTY,
        }
    }

    /// The trailing half of a wide character.
    pub const fn continuation(style: Style) -> Self {
        Self {
            symbol: ' ',
            width: 0,
            style,
        }
    }

    /// Set the style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.style.fg = fg;
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.style.bg = bg;
        self
    }

    /// The displayed character.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Display width in columns (0 for continuations).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The cell's style.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Whether this is the trailing half of a wide character.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }
}
