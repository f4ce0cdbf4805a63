//! Home screen: the featured dish card.

use super::{dish_card, paint_lines, Line, Span, Theme, PAD};
use crate::buffer::{Canvas, Modifiers, Style};
use crate::layout::Rect;
use crate::store::StoreState;
use crate::view::HomeView;

pub(crate) fn render(
    canvas: &mut Canvas,
    area: Rect,
    state: &StoreState,
    image_base_url: &str,
    theme: &Theme,
) {
    let base = Style::DEFAULT.fg(theme.text).bg(theme.background);
    let mut lines: Vec<Line> = vec![
        Line::new(),
        vec![Span::new("Featured", base.fg(theme.muted).add(Modifiers::BOLD))],
        Line::new(),
    ];
    match HomeView.featured(state) {
        Some(dish) => lines.extend(dish_card(
            dish,
            image_base_url,
            area.width.saturating_sub(PAD * 2),
            theme,
        )),
        None => lines.push(vec![Span::new("Nothing featured today.", base.fg(theme.muted))]),
    }
    paint_lines(canvas, area, &lines, 0, PAD, base);
}
