//! Rect: a rectangle primitive for layout calculations.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle covering a whole terminal.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Shrink by `dx` columns on the left and right and `dy` rows on top
    /// and bottom.
    #[must_use]
    pub const fn inset(&self, dx: u16, dy: u16) -> Self {
        if self.width <= dx * 2 || self.height <= dy * 2 {
            return Self::ZERO;
        }
        Self::new(self.x + dx, self.y + dy, self.width - dx * 2, self.height - dy * 2)
    }

    /// Split into a top part of `at` rows and the remainder.
    pub fn split_top(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(self.x, self.y + at, self.width, self.height - at),
        )
    }

    /// Split into the remainder and a bottom part of `at` rows.
    pub fn split_bottom(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, self.height - at),
            Self::new(self.x, self.y + self.height - at, self.width, at),
        )
    }

    /// A `width` x `height` rectangle centered inside this one, clamped to
    /// fit.
    #[must_use]
    pub fn centered(&self, width: u16, height: u16) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Self::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }

    /// The single row at offset `dy`, or an empty rect past the bottom.
    #[must_use]
    pub const fn row(&self, dy: u16) -> Self {
        if dy >= self.height {
            return Self::ZERO;
        }
        Self::new(self.x, self.y + dy, self.width, 1)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        assert_eq!(Rect::new(0, 0, 10, 6).inset(2, 1), Rect::new(2, 1, 6, 4));
        assert_eq!(Rect::new(0, 0, 4, 6).inset(2, 1), Rect::ZERO);
    }

    #[test]
    fn test_splits() {
        let area = Rect::from_size(80, 24);
        let (header, rest) = area.split_top(1);
        let (body, footer) = rest.split_bottom(1);
        assert_eq!(header, Rect::new(0, 0, 80, 1));
        assert_eq!(body, Rect::new(0, 1, 80, 22));
        assert_eq!(footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_centered_clamps() {
        let area = Rect::from_size(80, 24);
        assert_eq!(area.centered(40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(area.centered(100, 30), area);
    }

    #[test]
    fn test_row() {
        let area = Rect::new(2, 3, 10, 2);
        assert_eq!(area.row(1), Rect::new(2, 4, 10, 1));
        assert!(area.row(2).is_empty());
    }
}
