//! Navigation drawer overlay.

use super::Theme;
use crate::buffer::{Canvas, Cell, Modifiers, Style};
use crate::layout::Rect;
use crate::nav::{DrawerItem, Navigator};

const WIDTH: u16 = 22;

pub(crate) fn render(canvas: &mut Canvas, area: Rect, nav: &Navigator, theme: &Theme) {
    let panel = Rect::new(area.x, area.y, WIDTH.min(area.width), area.height);
    let base = Style::DEFAULT.fg(theme.drawer_fg).bg(theme.drawer_bg);
    canvas.fill(panel, Cell::EMPTY.with_style(base));
    canvas.put_str(
        panel.x + 2,
        panel.y + 1,
        "Menuboard",
        base.fg(theme.primary).add(Modifiers::BOLD),
        panel.width.saturating_sub(2),
    );

    for (i, item) in DrawerItem::ALL.iter().enumerate() {
        let Ok(offset) = u16::try_from(i) else {
            break;
        };
        let row = panel.row(3 + offset);
        let style = if *item == nav.drawer_highlight() {
            base.fg(theme.on_primary).bg(theme.primary).add(Modifiers::BOLD)
        } else {
            base
        };
        let marker = if *item == nav.active() { "● " } else { "  " };
        canvas.put_line(row, &format!(" {marker}{}", item.label()), style);
    }
}
