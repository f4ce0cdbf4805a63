//! Text Input Widget: single-line text field with cursor.
//!
//! Supports character insertion, deletion, cursor navigation and paste.
//! When focused, the terminal cursor is placed at the edit position.

use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Canvas, Rgb, Style};
use crate::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Colors and labels of a text field.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Entered text color.
    pub fg: Rgb,
    /// Row background.
    pub bg: Rgb,
    /// Hint drawn while the field is empty ("Author", "Comment").
    pub placeholder: String,
    /// Hint color.
    pub placeholder_fg: Rgb,
    /// Prompt prefix (e.g., "Author: ").
    pub prompt: String,
    /// Label color.
    pub prompt_fg: Rgb,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::new(30, 30, 30),
            placeholder: String::new(),
            placeholder_fg: Rgb::new(100, 100, 100),
            prompt: String::from("> "),
            prompt_fg: Rgb::from_u32(0x51_2D_A8),
        }
    }
}

/// One editable line, as used for the comment form's author and comment.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Entered text.
    content: String,
    /// Cursor position (byte offset, always on a char boundary).
    cursor: usize,
    /// Focused fields take keys and show the cursor.
    focused: bool,
    config: TextInputConfig,
}

impl TextInput {
    /// Create an unfocused, empty input.
    pub fn new(config: TextInputConfig) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            config,
        }
    }

    /// Entered text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text and put the cursor after it.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Whether nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Give or take focus.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the field has focus.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    fn insert_str(&mut self, s: &str) {
        // Single-line: newlines from pastes become spaces.
        let s = s.replace(['\r', '\n'], " ");
        self.content.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    /// Backspace: drop the char left of the cursor.
    fn backspace(&mut self) {
        if let Some((prev, _)) = self.content[..self.cursor].char_indices().last() {
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete: drop the char under the cursor.
    fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    fn cursor_left(&mut self) {
        if let Some((prev, _)) = self.content[..self.cursor].char_indices().last() {
            self.cursor = prev;
        }
    }

    fn cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }
}

impl Widget for TextInput {
    fn render(&self, area: Rect, canvas: &mut Canvas) {
        if area.is_empty() {
            return;
        }
        let base = Style::DEFAULT.bg(self.config.bg);
        canvas.put_line(area.row(0), "", base);

        let prompt_w = canvas.put_str(
            area.x,
            area.y,
            &self.config.prompt,
            base.fg(self.config.prompt_fg),
            area.width,
        );
        let text_x = area.x + prompt_w;
        let text_width = area.width.saturating_sub(prompt_w);
        if text_width == 0 {
            return;
        }

        if self.content.is_empty() {
            canvas.put_str(
                text_x,
                area.y,
                &self.config.placeholder,
                base.fg(self.config.placeholder_fg),
                text_width,
            );
            if self.focused {
                canvas.set_cursor(text_x, area.y);
            }
            return;
        }

        // Scroll horizontally so the cursor stays visible.
        let before = &self.content[..self.cursor];
        let cursor_col = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let skip = cursor_col.saturating_sub(text_width - 1);
        let mut col = 0u16;
        let mut start = 0;
        for (i, c) in self.content.char_indices() {
            if col >= skip {
                start = i;
                break;
            }
            col += u16::try_from(unicode_width::UnicodeWidthChar::width(c).unwrap_or(0)).unwrap_or(0);
            start = i + c.len_utf8();
        }

        canvas.put_str(
            text_x,
            area.y,
            &self.content[start..],
            base.fg(self.config.fg),
            text_width,
        );
        if self.focused {
            canvas.set_cursor(text_x + cursor_col - col.min(cursor_col), area.y);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.focused {
            return false;
        }

        match event {
            InputEvent::Key { code, modifiers } => match code {
                KeyCode::Char(c) if !modifiers.control && !modifiers.alt => {
                    let mut buf = [0u8; 4];
                    self.insert_str(c.encode_utf8(&mut buf));
                    true
                }
                KeyCode::Backspace => {
                    self.backspace();
                    true
                }
                KeyCode::Delete => {
                    self.delete();
                    true
                }
                KeyCode::Left => {
                    self.cursor_left();
                    true
                }
                KeyCode::Right => {
                    self.cursor_right();
                    true
                }
                KeyCode::Home => {
                    self.cursor = 0;
                    true
                }
                KeyCode::End => {
                    self.cursor = self.content.len();
                    true
                }
                _ => false,
            },
            InputEvent::Paste(text) => {
                self.insert_str(text);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused() -> TextInput {
        let mut input = TextInput::new(TextInputConfig::default());
        input.set_focused(true);
        input
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_input(&InputEvent::key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_text_input_basic() {
        let mut input = focused();
        type_str(&mut input, "Hi");
        assert_eq!(input.content(), "Hi");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = TextInput::new(TextInputConfig::default());
        assert!(!input.handle_input(&InputEvent::key(KeyCode::Char('x'))));
        assert!(input.is_empty());
    }

    #[test]
    fn test_text_input_backspace_multibyte() {
        let mut input = focused();
        input.set_content("Café");
        input.handle_input(&InputEvent::key(KeyCode::Backspace));
        assert_eq!(input.content(), "Caf");
    }

    #[test]
    fn test_text_input_cursor_movement() {
        let mut input = focused();
        input.set_content("Hello");

        input.handle_input(&InputEvent::key(KeyCode::Left));
        assert_eq!(input.cursor, 4);
        input.handle_input(&InputEvent::key(KeyCode::Home));
        assert_eq!(input.cursor, 0);
        input.handle_input(&InputEvent::key(KeyCode::Delete));
        assert_eq!(input.content(), "ello");
        input.handle_input(&InputEvent::key(KeyCode::End));
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = focused();
        input.handle_input(&InputEvent::Paste("two\nlines".into()));
        assert_eq!(input.content(), "two lines");
    }

    #[test]
    fn test_render_places_cursor() {
        let mut input = TextInput::new(TextInputConfig {
            prompt: "Author: ".into(),
            ..TextInputConfig::default()
        });
        input.set_focused(true);
        input.set_content("Ada");

        let mut canvas = Canvas::new(30, 1);
        input.render(Rect::new(0, 0, 30, 1), &mut canvas);
        assert_eq!(canvas.row_text(0), "Author: Ada");
        assert_eq!(canvas.cursor(), Some((11, 0)));
    }

    #[test]
    fn test_render_scrolls_long_content() {
        let mut input = focused();
        input.set_content("abcdefghij");

        let mut canvas = Canvas::new(8, 1);
        input.render(Rect::new(0, 0, 8, 1), &mut canvas);
        // prompt "> " leaves 6 columns; cursor sits after the last char
        assert_eq!(canvas.row_text(0), "> fghij");
        assert_eq!(canvas.cursor(), Some((7, 0)));
    }

    #[test]
    fn test_placeholder_when_unfocused() {
        let input = TextInput::new(TextInputConfig {
            placeholder: "Comment".into(),
            ..TextInputConfig::default()
        });
        let mut canvas = Canvas::new(20, 1);
        input.render(Rect::new(0, 0, 20, 1), &mut canvas);
        assert_eq!(canvas.row_text(0), "> Comment");
        assert!(canvas.cursor().is_none());
    }
}
