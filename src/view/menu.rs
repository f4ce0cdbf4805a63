//! Menu list view: a cursor over the catalog.

use super::detail::DetailParams;
use crate::actor::{InputEvent, KeyCode};
use crate::model::DishId;
use crate::store::StoreState;

/// Result of a key press on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Key not handled here.
    None,
    /// Selection moved.
    Moved,
    /// Open the detail route for a dish.
    Open(DetailParams),
}

/// Selection state for the dish list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuView {
    selected: usize,
}

impl MenuView {
    /// Selection at the first dish.
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Index of the highlighted dish.
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Move the highlight by `delta`, clamped to `0..len`.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Detail params for the highlighted dish.
    pub fn open_selected(&self, state: &StoreState) -> Option<DetailParams> {
        state
            .dishes()
            .get(self.selected)
            .map(|dish| DetailParams::for_dish(dish.id))
    }

    /// Highlighted dish id, if the catalog is not empty.
    pub fn selected_id(&self, state: &StoreState) -> Option<DishId> {
        state.dishes().get(self.selected).map(|dish| dish.id)
    }

    /// First row to draw so the highlight stays within `rows` visible rows
    /// of `per_item` lines each.
    pub fn first_visible(&self, rows: u16, per_item: u16) -> usize {
        let visible = usize::from(rows / per_item.max(1)).max(1);
        (self.selected + 1).saturating_sub(visible)
    }

    /// Handle list navigation keys.
    pub fn handle_input(&mut self, event: &InputEvent, state: &StoreState) -> MenuAction {
        let InputEvent::Key { code, .. } = event else {
            return MenuAction::None;
        };
        let len = state.dishes().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1, len),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1, len),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.move_by(isize::MAX, len),
            KeyCode::Enter => {
                return self
                    .open_selected(state)
                    .map_or(MenuAction::None, MenuAction::Open);
            }
            _ => return MenuAction::None,
        }
        MenuAction::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::store::Store;

    fn state() -> StoreState {
        let data = Dataset::embedded().unwrap();
        Store::new(data.catalog, data.comments).state().clone()
    }

    #[test]
    fn test_selection_clamps() {
        let state = state();
        let mut menu = MenuView::new();
        menu.handle_input(&InputEvent::key(KeyCode::Up), &state);
        assert_eq!(menu.selected(), 0);
        for _ in 0..10 {
            menu.handle_input(&InputEvent::key(KeyCode::Char('j')), &state);
        }
        assert_eq!(menu.selected(), state.dishes().len() - 1);
        menu.handle_input(&InputEvent::key(KeyCode::Home), &state);
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_enter_opens_index_as_param() {
        let state = state();
        let mut menu = MenuView::new();
        menu.handle_input(&InputEvent::key(KeyCode::Down), &state);
        menu.handle_input(&InputEvent::key(KeyCode::Down), &state);
        assert_eq!(
            menu.handle_input(&InputEvent::key(KeyCode::Enter), &state),
            MenuAction::Open(DetailParams::new("2"))
        );
    }

    #[test]
    fn test_empty_catalog() {
        let state = StoreState::default();
        let mut menu = MenuView::new();
        menu.move_by(3, 0);
        assert_eq!(menu.selected(), 0);
        assert_eq!(
            menu.handle_input(&InputEvent::key(KeyCode::Enter), &state),
            MenuAction::None
        );
    }

    #[test]
    fn test_first_visible_follows_selection() {
        let mut menu = MenuView::new();
        assert_eq!(menu.first_visible(6, 3), 0);
        menu.move_by(3, 10);
        assert_eq!(menu.first_visible(6, 3), 2);
    }
}
