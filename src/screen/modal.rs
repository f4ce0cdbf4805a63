//! Comment form modal.

use super::Theme;
use crate::buffer::{Canvas, Cell, Modifiers, Style};
use crate::layout::Rect;
use crate::view::{CommentForm, FormField};
use crate::widget::{text::truncate, Widget};

const WIDTH: u16 = 56;
const HEIGHT: u16 = 11;

fn border(canvas: &mut Canvas, area: Rect, style: Style) {
    let inner = area.width.saturating_sub(2);
    let horizontal = "─".repeat(usize::from(inner));
    canvas.put_str(area.x, area.y, &format!("┌{horizontal}┐"), style, area.width);
    canvas.put_str(
        area.x,
        area.bottom() - 1,
        &format!("└{horizontal}┘"),
        style,
        area.width,
    );
    for y in area.y + 1..area.bottom() - 1 {
        canvas.set(area.x, y, Cell::new('│').with_style(style));
        canvas.set(area.right() - 1, y, Cell::new('│').with_style(style));
    }
}

fn button(label: &str, focused: bool, style: Style) -> (String, Style) {
    if focused {
        (format!("▸ {label} "), style.add(Modifiers::BOLD | Modifiers::UNDERLINE))
    } else {
        (format!("  {label} "), style)
    }
}

/// Paint the form centered in `area`.
pub(crate) fn render(canvas: &mut Canvas, area: Rect, form: &CommentForm, theme: &Theme) {
    let rect = area.centered(WIDTH.min(area.width), HEIGHT.min(area.height));
    if rect.width < 4 || rect.height < 3 {
        return;
    }
    let base = Style::DEFAULT.fg(theme.text).bg(theme.surface);
    canvas.fill(rect, Cell::EMPTY.with_style(base));
    border(canvas, rect, base.fg(theme.accent));

    let title = truncate(" Add a comment ", rect.width.saturating_sub(4));
    canvas.put_str(
        rect.x + 2,
        rect.y,
        &title,
        base.fg(theme.on_primary).bg(theme.primary).add(Modifiers::BOLD),
        rect.width.saturating_sub(4),
    );

    let inner = rect.inset(2, 1);
    form.rating_input().render(inner.row(1), canvas);
    form.author_input().render(inner.row(3), canvas);
    form.comment_input().render(inner.row(5), canvas);

    let r = inner.row(7);
    if !r.is_empty() {
        let (submit, submit_style) = button(
            "Submit",
            form.focus() == FormField::Submit,
            base.fg(theme.on_primary).bg(theme.primary),
        );
        let (cancel, cancel_style) = button(
            "Cancel",
            form.focus() == FormField::Cancel,
            base.fg(theme.on_primary).bg(theme.cancel),
        );
        let used = canvas.put_str(r.x, r.y, &submit, submit_style, r.width);
        canvas.put_str(
            r.x + used + 2,
            r.y,
            &cancel,
            cancel_style,
            r.width.saturating_sub(used + 2),
        );
    }
}
