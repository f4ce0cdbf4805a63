//! Widget trait.

use crate::actor::InputEvent;
use crate::buffer::Canvas;
use crate::layout::Rect;

/// A UI component that can be drawn and may react to input.
///
/// Widgets are laid out per frame: the caller passes the area to draw in.
pub trait Widget {
    /// Draw into `area`. Widgets must not write outside it.
    fn render(&self, area: Rect, canvas: &mut Canvas);

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed by this widget,
    /// `false` if it should propagate.
    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
    }
}
