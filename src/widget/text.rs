//! Text helpers: grapheme-aware wrapping and truncation.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap to `width` columns.
///
/// Breaks at word boundaries; a word wider than the line is split between
/// graphemes. Explicit newlines start a new line. Always returns at least one
/// line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_word_bounds() {
            let word_width = word.width();
            if line_width + word_width > width && line_width > 0 {
                lines.push(line.trim_end().to_string());
                line.clear();
                line_width = 0;
                if word.trim().is_empty() {
                    continue;
                }
            }
            if word_width > width {
                for grapheme in word.graphemes(true) {
                    let w = grapheme.width();
                    if line_width > 0 && line_width + w > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push_str(grapheme);
                    line_width += w;
                }
            } else {
                line.push_str(word);
                line_width += word_width;
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
pub fn truncate(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w + 1 > width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}
