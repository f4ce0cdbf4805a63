//! Dish details: the dish card followed by the comment thread.

use super::{dish_card, max_scroll, paint_lines, Line, Span, Theme, PAD};
use crate::buffer::{Canvas, Modifiers, Style};
use crate::layout::Rect;
use crate::store::StoreState;
use crate::view::{DetailSnapshot, DetailView};
use crate::widget::{stars, text::wrap};
use time::macros::format_description;
use time::OffsetDateTime;

/// Comment timestamp as `16-Oct-2012 5:57 PM`.
pub fn format_date(date: OffsetDateTime) -> String {
    let format = format_description!(
        "[day]-[month repr:short]-[year] [hour repr:12 padding:none]:[minute] [period]"
    );
    date.format(format).unwrap_or_else(|_| date.to_string())
}

/// Lay out the detail body for a content width. Empty when there is no dish.
pub(crate) fn detail_lines(
    snapshot: &DetailSnapshot<'_>,
    image_base_url: &str,
    width: u16,
    theme: &Theme,
) -> Vec<Line> {
    let Some(dish) = snapshot.dish else {
        return Vec::new();
    };
    let base = Style::DEFAULT.fg(theme.text).bg(theme.background);
    let muted = base.fg(theme.muted);
    let text_width = width.saturating_sub(PAD * 2);
    let mut lines = dish_card(dish, image_base_url, text_width, theme);
    lines.push(Line::new());

    let heart = if snapshot.favorite { "♥" } else { "♡" };
    lines.push(vec![
        Span::new(heart, base.fg(theme.heart).add(Modifiers::BOLD)),
        Span::new("   ", base),
        Span::new("✎", base.fg(theme.pencil).add(Modifiers::BOLD)),
    ]);
    lines.push(Line::new());

    lines.push(vec![Span::new(
        "Comments",
        base.fg(theme.accent).add(Modifiers::BOLD),
    )]);
    lines.push(vec![Span::new(
        "─".repeat(usize::from(text_width)),
        muted,
    )]);

    if snapshot.comments.is_empty() {
        lines.push(vec![Span::new("No comments yet.", muted)]);
    }
    for comment in &snapshot.comments {
        lines.extend(
            wrap(&comment.comment, text_width)
                .into_iter()
                .map(|l| vec![Span::new(l, base)]),
        );
        lines.push(vec![
            Span::new(stars(comment.rating), base.fg(theme.star)),
            Span::new(format!("  {}", comment.rating.review()), muted),
        ]);
        lines.push(vec![Span::new(
            format!("-- {}, {}", comment.author, format_date(comment.date)),
            muted,
        )]);
        lines.push(Line::new());
    }
    lines
}

/// Paint the detail screen, and the comment form over it when open.
pub(crate) fn render(
    canvas: &mut Canvas,
    area: Rect,
    view: &DetailView,
    state: &StoreState,
    image_base_url: &str,
    theme: &Theme,
) {
    let snapshot = view.snapshot(state);
    let lines = detail_lines(&snapshot, image_base_url, area.width, theme);
    let scroll = view.scroll().min(max_scroll(lines.len(), area.height));
    let base = Style::DEFAULT.fg(theme.text).bg(theme.background);
    paint_lines(canvas, area, &lines, usize::from(scroll), PAD, base);

    if view.form().is_visible() {
        super::render_modal(canvas, area, view.form(), theme);
    }
}
