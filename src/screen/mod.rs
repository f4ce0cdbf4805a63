//! Screens: paint views onto a [`Canvas`].
//!
//! Screens are stateless functions of the store, a view and an area. Long
//! bodies are first laid out as [`Line`]s and then painted from a scroll
//! offset.

mod detail;
mod drawer;
mod home;
mod menu;
mod modal;
mod theme;

pub use detail::format_date;
pub(crate) use detail::{detail_lines, render as render_detail};
pub(crate) use drawer::render as render_drawer;
pub(crate) use home::render as render_home;
pub(crate) use menu::render as render_menu;
pub(crate) use modal::render as render_modal;
pub use theme::Theme;

use crate::buffer::{Canvas, Modifiers, Style};
use crate::layout::Rect;
use crate::model::Dish;
use crate::widget::text::wrap;

/// Left and right margin of body text.
pub(crate) const PAD: u16 = 2;

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub(crate) fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One painted row.
pub(crate) type Line = Vec<Span>;

/// Paint `lines` into `area` starting at line `scroll`, with `pad` columns of
/// left margin. Rows are first cleared to `base`.
pub(crate) fn paint_lines(
    canvas: &mut Canvas,
    area: Rect,
    lines: &[Line],
    scroll: usize,
    pad: u16,
    base: Style,
) {
    for dy in 0..area.height {
        let row = area.row(dy);
        canvas.put_line(row, "", base);
        let Some(line) = lines.get(scroll + usize::from(dy)) else {
            continue;
        };
        let mut x = row.x + pad;
        let limit = row.right().saturating_sub(pad);
        for span in line {
            x += canvas.put_str(x, row.y, &span.text, span.style, limit.saturating_sub(x));
        }
    }
}

/// Name, label, price, image and description of a dish, wrapped to
/// `width`.
pub(crate) fn dish_card(dish: &Dish, image_base_url: &str, width: u16, theme: &Theme) -> Vec<Line> {
    let base = Style::DEFAULT.fg(theme.text).bg(theme.background);
    let muted = base.fg(theme.muted);
    let mut lines: Vec<Line> = Vec::new();

    let mut title = vec![Span::new(
        dish.name.clone(),
        base.fg(theme.accent).add(Modifiers::BOLD),
    )];
    if !dish.label.is_empty() {
        title.push(Span::new("  ", base));
        title.push(Span::new(
            format!(" {} ", dish.label),
            base.fg(theme.on_primary).bg(theme.heart),
        ));
    }
    lines.push(title);
    lines.push(vec![Span::new(
        format!("{} · ${}", dish.category, dish.price),
        muted,
    )]);
    lines.push(vec![Span::new(
        format!("image: {}", dish.image_uri(image_base_url)),
        muted.add(Modifiers::ITALIC),
    )]);
    lines.push(Line::new());
    lines.extend(
        wrap(&dish.description, width)
            .into_iter()
            .map(|l| vec![Span::new(l, base)]),
    );
    lines
}

/// Largest useful scroll offset for `lines` in `rows` visible rows.
pub(crate) fn max_scroll(lines: usize, rows: u16) -> u16 {
    u16::try_from(lines.saturating_sub(usize::from(rows))).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_lines_scrolls_and_clears() {
        let mut canvas = Canvas::new(10, 3);
        canvas.put_str(0, 2, "stale", Style::DEFAULT, 10);
        let lines: Vec<Line> = ["a", "b", "c"]
            .iter()
            .map(|t| vec![Span::new(*t, Style::DEFAULT), Span::new("!", Style::DEFAULT)])
            .collect();

        let area = canvas.area();
        paint_lines(&mut canvas, area, &lines, 1, 1, Style::DEFAULT);
        assert_eq!(canvas.row_text(0), " b!");
        assert_eq!(canvas.row_text(1), " c!");
        assert_eq!(canvas.row_text(2), "");
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(max_scroll(3, 10), 0);
        assert_eq!(max_scroll(12, 10), 2);
    }
}
