//! `FrameWriter`: turns canvases into terminal output.
//!
//! The writer keeps the last frame it emitted. Each new frame is compared row
//! by row and only changed rows are rewritten. The first frame, and any frame
//! whose size differs from the last, clears the screen and is written whole.
//! All commands are queued and flushed once per frame.

use crate::buffer::{Canvas, Modifiers, Style};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Output counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames written.
    pub frames: u64,
    /// Frames that redrew the whole screen.
    pub full_redraws: u64,
    /// Rows rewritten across all frames.
    pub rows_written: u64,
}

/// Diffing frame writer.
#[derive(Debug, Default)]
pub struct FrameWriter {
    previous: Option<Canvas>,
    stats: FrameStats,
}

impl FrameWriter {
    /// Create a writer with no previous frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame so the next write is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Output counters so far.
    pub const fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Write `canvas`, returning how many rows were emitted.
    pub fn write_frame<W: Write>(&mut self, canvas: &Canvas, out: &mut W) -> io::Result<u16> {
        let previous = self
            .previous
            .as_ref()
            .filter(|p| p.width() == canvas.width() && p.height() == canvas.height());

        if previous.is_none() {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor, Clear(ClearType::All))?;
            self.stats.full_redraws += 1;
        }

        let mut pen: Option<Style> = None;
        let mut rows = 0u16;
        for y in 0..canvas.height() {
            let row = canvas.row(y);
            if previous.is_some_and(|p| p.row(y) == row) {
                continue;
            }
            queue!(out, MoveTo(0, y))?;
            for cell in row.iter().filter(|c| !c.is_continuation()) {
                let style = cell.style();
                if pen != Some(style) {
                    apply_style(out, style, pen)?;
                    pen = Some(style);
                }
                queue!(out, Print(cell.symbol()))?;
            }
            rows += 1;
        }

        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        match canvas.cursor() {
            Some((x, y)) => queue!(out, MoveTo(x, y), Show)?,
            None => queue!(out, Hide)?,
        }
        out.flush()?;

        match self.previous.as_mut() {
            Some(p) => p.clone_from(canvas),
            None => self.previous = Some(canvas.clone()),
        }
        self.stats.frames += 1;
        self.stats.rows_written += u64::from(rows);
        Ok(rows)
    }
}

fn apply_style<W: Write>(out: &mut W, style: Style, pen: Option<Style>) -> io::Result<()> {
    match pen {
        Some(pen) if pen.modifiers == style.modifiers => {
            if pen.fg != style.fg {
                queue!(out, SetForegroundColor(style.fg.into()))?;
            }
            if pen.bg != style.bg {
                queue!(out, SetBackgroundColor(style.bg.into()))?;
            }
        }
        _ => {
            // Attribute reset also clears colors, so both are re-sent.
            queue!(out, SetAttribute(Attribute::Reset))?;
            for (flag, attr) in [
                (Modifiers::BOLD, Attribute::Bold),
                (Modifiers::DIM, Attribute::Dim),
                (Modifiers::ITALIC, Attribute::Italic),
                (Modifiers::UNDERLINE, Attribute::Underlined),
                (Modifiers::REVERSED, Attribute::Reverse),
            ] {
                if style.modifiers.contains(flag) {
                    queue!(out, SetAttribute(attr))?;
                }
            }
            queue!(
                out,
                SetForegroundColor(style.fg.into()),
                SetBackgroundColor(style.bg.into())
            )?;
        }
    }
    Ok(())
}
