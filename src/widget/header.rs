//! Header Bar Widget: three-section title bar.
//!
//! Left, center and right sections on one row; the app draws its navigation
//! header with it.

use super::text::truncate;
use super::traits::Widget;
use crate::buffer::{Canvas, Modifiers, Rgb, Style};
use crate::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Configuration for the header bar widget.
#[derive(Debug, Clone)]
pub struct HeaderBarConfig {
    /// Background color.
    pub bg: Rgb,
    /// Left section text color.
    pub left_fg: Rgb,
    /// Center section text color.
    pub center_fg: Rgb,
    /// Right section text color.
    pub right_fg: Rgb,
    /// Whether the center title is bold.
    pub bold_center: bool,
}

impl Default for HeaderBarConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(40, 40, 40),
            left_fg: Rgb::WHITE,
            center_fg: Rgb::new(150, 150, 150),
            right_fg: Rgb::new(100, 200, 100),
            bold_center: false,
        }
    }
}

/// A three-section bar (left, center, right).
#[derive(Debug, Clone, Default)]
pub struct HeaderBar {
    left: String,
    center: String,
    right: String,
    config: HeaderBarConfig,
}

impl HeaderBar {
    /// Create an empty bar with the given configuration.
    pub fn new(config: HeaderBarConfig) -> Self {
        Self {
            left: String::new(),
            center: String::new(),
            right: String::new(),
            config,
        }
    }

    /// Set all sections at once.
    #[must_use]
    pub fn with_sections(
        mut self,
        left: impl Into<String>,
        center: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.left = left.into();
        self.center = center.into();
        self.right = right.into();
        self
    }

    /// Left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Center section content.
    pub fn center(&self) -> &str {
        &self.center
    }

    /// Right section content.
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Widget for HeaderBar {
    fn render(&self, area: Rect, canvas: &mut Canvas) {
        if area.is_empty() {
            return;
        }
        let base = Style::DEFAULT.bg(self.config.bg);
        canvas.put_line(area.row(0), "", base);
        let third = area.width / 3;

        // Center first so the sides win on narrow terminals.
        let center = truncate(&self.center, third.max(1));
        let center_w = u16::try_from(center.width()).unwrap_or(0);
        let mut center_style = base.fg(self.config.center_fg);
        if self.config.bold_center {
            center_style = center_style.add(Modifiers::BOLD);
        }
        canvas.put_str(
            area.x + (area.width - center_w) / 2,
            area.y,
            &center,
            center_style,
            center_w,
        );

        canvas.put_str(
            area.x,
            area.y,
            &truncate(&self.left, third),
            base.fg(self.config.left_fg),
            third,
        );

        let right = truncate(&self.right, third);
        let right_w = u16::try_from(right.width()).unwrap_or(0);
        canvas.put_str(
            area.right() - right_w,
            area.y,
            &right,
            base.fg(self.config.right_fg),
            right_w,
        );
    }
}
