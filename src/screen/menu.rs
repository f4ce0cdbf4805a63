//! Menu screen: every dish, three rows each.

use super::{Theme, PAD};
use crate::buffer::{Canvas, Modifiers, Style};
use crate::layout::Rect;
use crate::store::StoreState;
use crate::view::MenuView;
use crate::widget::text::truncate;

const ROWS_PER_ITEM: u16 = 3;

pub(crate) fn render(
    canvas: &mut Canvas,
    area: Rect,
    menu: &MenuView,
    state: &StoreState,
    theme: &Theme,
) {
    let base = Style::DEFAULT.fg(theme.text).bg(theme.background);
    for dy in 0..area.height {
        canvas.put_line(area.row(dy), "", base);
    }
    let dishes = state.dishes();
    if dishes.is_empty() {
        canvas.put_str(
            area.x + PAD,
            area.y,
            "The menu is empty.",
            base.fg(theme.muted),
            area.width.saturating_sub(PAD),
        );
        return;
    }

    let width = area.width.saturating_sub(PAD * 2);
    let first = menu.first_visible(area.height, ROWS_PER_ITEM);
    let mut y = area.y;
    for (index, dish) in dishes.iter().enumerate().skip(first) {
        if y + 1 >= area.bottom() {
            break;
        }
        let selected = index == menu.selected();
        let row_style = if selected { base.bg(theme.surface) } else { base };
        canvas.put_line(Rect::new(area.x, y, area.width, 1), "", row_style);
        canvas.put_line(Rect::new(area.x, y + 1, area.width, 1), "", row_style);

        let marker = if selected { "▸ " } else { "  " };
        let mut x = area.x;
        x += canvas.put_str(x, y, marker, row_style.fg(theme.heart), PAD);
        let name_style = row_style.fg(theme.accent).add(Modifiers::BOLD);
        canvas.put_str(x, y, &truncate(&dish.name, width), name_style, width);
        canvas.put_str(
            area.x + PAD,
            y + 1,
            &truncate(&dish.description, width),
            row_style.fg(theme.muted),
            width,
        );
        y += ROWS_PER_ITEM;
    }
}
