//! Canvas: a grid of cells representing one frame.
//!
//! Cells are stored contiguously in row-major order: `index = y * width + x`.

use super::cell::{Cell, Style};
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One frame's worth of styled cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
    /// Where the terminal cursor should sit, if shown.
    cursor: Option<(u16, u16)>,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
            cursor: None,
        }
    }

    /// Canvas width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full canvas as a rectangle.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell. Returns `false` out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = cell;
            true
        } else {
            false
        }
    }

    /// One row of cells. Empty if `y` is out of bounds.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Fill a rectangle (clipped to the canvas).
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.set(x, y, cell);
            }
        }
    }

    /// Blank every cell and hide the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.cursor = None;
    }

    /// Change dimensions. Content is discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.width || height != self.height {
            *self = Self::new(width, height);
        } else {
            self.clear();
        }
    }

    /// Draw `text` starting at (x, y), using at most `max_width` columns.
    ///
    /// Graphemes that would straddle the limit are dropped. Zero-width
    /// graphemes are skipped. Returns the number of columns used.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style, max_width: u16) -> u16 {
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let Ok(width) = u16::try_from(grapheme.width()) else {
                break;
            };
            if width == 0 {
                continue;
            }
            if col + width > limit {
                break;
            }
            let symbol = grapheme.chars().next().unwrap_or(' ');
            self.set(col, y, Cell::new(symbol).with_style(style));
            if width == 2 {
                self.set(col + 1, y, Cell::continuation(style));
            }
            col += width;
        }
        col - x
    }

    /// Draw `text` inside `rect`'s first row, padding the rest of the row
    /// with `style`'s background.
    pub fn put_line(&mut self, rect: Rect, text: &str, style: Style) {
        if rect.is_empty() {
            return;
        }
        self.fill(Rect::new(rect.x, rect.y, rect.width, 1), Cell::EMPTY.with_style(style));
        self.put_str(rect.x, rect.y, text, style, rect.width);
    }

    /// Request the cursor be shown at (x, y).
    pub const fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    /// Requested cursor position.
    #[inline]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// The visible text of row `y`, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let text: String = self
            .row(y)
            .iter()
            .filter(|c| !c.is_continuation())
            .map(Cell::symbol)
            .collect();
        text.trim_end().to_string()
    }

    /// All rows as text, joined by newlines.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
