//! Rating widget: a 1-5 star picker.

use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Canvas, Rgb, Style};
use crate::layout::Rect;
use crate::model::Rating;

const FILLED: Rgb = Rgb::from_u32(0xF1_C4_0F);
const EMPTY: Rgb = Rgb::new(110, 110, 110);

/// Five stars, the first `rating` of them filled.
pub fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.stars());
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Star picker used by the comment form.
#[derive(Debug, Clone, Default)]
pub struct RatingInput {
    rating: Rating,
    focused: bool,
}

impl RatingInput {
    /// A picker starting at the default rating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rating.
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Replace the rating.
    pub const fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Draw a read-only rating at (x, y). Returns the columns used.
    pub fn draw(rating: Rating, x: u16, y: u16, bg: Rgb, canvas: &mut Canvas, max_width: u16) -> u16 {
        let filled = rating.stars();
        let mut used = 0;
        for i in 1..=5u8 {
            let (symbol, color) = if i <= filled { ("★", FILLED) } else { ("☆", EMPTY) };
            used += canvas.put_str(x + used, y, symbol, Style::DEFAULT.fg(color).bg(bg), max_width.saturating_sub(used));
        }
        used
    }
}

impl Widget for RatingInput {
    fn render(&self, area: Rect, canvas: &mut Canvas) {
        if area.is_empty() {
            return;
        }
        let bg = Rgb::new(30, 30, 30);
        let base = Style::DEFAULT.bg(bg);
        canvas.put_line(area.row(0), "", base);

        let marker = if self.focused { "▸ " } else { "  " };
        let mut used = canvas.put_str(area.x, area.y, marker, base, area.width);
        used += Self::draw(self.rating, area.x + used, area.y, bg, canvas, area.width - used);
        canvas.put_str(
            area.x + used,
            area.y,
            &format!("  {}", self.rating.review()),
            base,
            area.width - used,
        );
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.focused {
            return false;
        }
        let InputEvent::Key { code, .. } = event else {
            return false;
        };
        match *code {
            KeyCode::Left => self.rating = self.rating.decrement(),
            KeyCode::Right => self.rating = self.rating.increment(),
            KeyCode::Char(c @ '1'..='5') => {
                let stars = u8::try_from(c.to_digit(10).unwrap_or(5)).unwrap_or(5);
                if let Ok(rating) = Rating::try_from(stars) {
                    self.rating = rating;
                }
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_text() {
        assert_eq!(stars(Rating::try_from(3).unwrap()), "★★★☆☆");
        assert_eq!(stars(Rating::MAX), "★★★★★");
    }

    #[test]
    fn test_keys_adjust_rating() {
        let mut input = RatingInput::new();
        input.set_focused(true);
        assert_eq!(input.rating(), Rating::MAX);

        assert!(input.handle_input(&InputEvent::key(KeyCode::Left)));
        assert_eq!(input.rating().stars(), 4);

        assert!(input.handle_input(&InputEvent::key(KeyCode::Char('2'))));
        assert_eq!(input.rating().stars(), 2);

        assert!(!input.handle_input(&InputEvent::key(KeyCode::Char('9'))));
        assert_eq!(input.rating().stars(), 2);
    }

    #[test]
    fn test_render_shows_review() {
        let mut input = RatingInput::new();
        input.set_rating(Rating::try_from(4).unwrap());
        let mut canvas = Canvas::new(30, 1);
        input.render(Rect::new(0, 0, 30, 1), &mut canvas);
        assert_eq!(canvas.row_text(0), "  ★★★★☆  Very Good");
    }
}
