//! Navigation shell: a drawer of entries, each owning a route stack.
//!
//! ```text
//!  Drawer
//!  ├─ Home  [Home]
//!  └─ Menu  [Menu] ─▶ [Menu, DishDetail("2")]
//! ```
//!
//! Switching entries keeps each stack intact; `back` pops within the active
//! stack but never removes its root.

use crate::view::{DetailParams, DetailView, MenuView};

/// Top-level drawer entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerItem {
    /// Featured dish.
    Home,
    /// Full dish list.
    Menu,
}

impl DrawerItem {
    /// Entries in drawer order.
    pub const ALL: [Self; 2] = [Self::Home, Self::Menu];

    /// Label shown in the drawer.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
        }
    }

    fn root(self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Menu => Route::Menu(MenuView::new()),
        }
    }
}

/// A screen and its view state.
#[derive(Debug, Clone)]
pub enum Route {
    /// Home screen.
    Home,
    /// Menu list.
    Menu(MenuView),
    /// Dish details.
    DishDetail(Box<DetailView>),
}

impl Route {
    /// Detail route for `params`.
    pub fn dish_detail(params: DetailParams) -> Self {
        Self::DishDetail(Box::new(DetailView::new(params)))
    }

    /// Header title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu(_) => "Menu",
            Self::DishDetail(_) => "Dish Details",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Drawer {
    open: bool,
    highlighted: usize,
}

/// Drawer plus per-entry stacks.
#[derive(Debug, Clone)]
pub struct Navigator {
    active: DrawerItem,
    home: Vec<Route>,
    menu: Vec<Route>,
    drawer: Drawer,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on Home with the drawer closed.
    pub fn new() -> Self {
        Self {
            active: DrawerItem::Home,
            home: vec![DrawerItem::Home.root()],
            menu: vec![DrawerItem::Menu.root()],
            drawer: Drawer::default(),
        }
    }

    /// Active drawer entry.
    pub const fn active(&self) -> DrawerItem {
        self.active
    }

    fn stack(&self) -> &Vec<Route> {
        match self.active {
            DrawerItem::Home => &self.home,
            DrawerItem::Menu => &self.menu,
        }
    }

    fn stack_mut(&mut self) -> &mut Vec<Route> {
        match self.active {
            DrawerItem::Home => &mut self.home,
            DrawerItem::Menu => &mut self.menu,
        }
    }

    /// Depth of the active stack, root included.
    pub fn depth(&self) -> usize {
        self.stack().len()
    }

    /// Route on top of the active stack.
    pub fn current(&self) -> &Route {
        // Stacks are created non-empty and `back` never pops the root.
        &self.stack()[self.stack().len() - 1]
    }

    /// Mutable route on top of the active stack.
    pub fn current_mut(&mut self) -> &mut Route {
        let stack = self.stack_mut();
        let top = stack.len() - 1;
        &mut stack[top]
    }

    /// Header title for the current route.
    pub fn title(&self) -> &'static str {
        self.current().title()
    }

    /// Push a route onto the active stack.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = self.title(), to = route.title(), "navigate");
        self.stack_mut().push(route);
    }

    /// Pop the active stack. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        let stack = self.stack_mut();
        if stack.len() <= 1 {
            return false;
        }
        stack.pop();
        tracing::debug!(to = self.title(), "back");
        true
    }

    /// Switch drawer entry and close the drawer.
    pub fn select_drawer(&mut self, item: DrawerItem) {
        if self.active != item {
            tracing::debug!(item = item.label(), "drawer selection");
        }
        self.active = item;
        self.drawer.open = false;
    }

    /// Open or close the drawer. Opening highlights the active entry.
    pub fn toggle_drawer(&mut self) {
        self.drawer.open = !self.drawer.open;
        if self.drawer.open {
            self.drawer.highlighted = DrawerItem::ALL
                .iter()
                .position(|item| *item == self.active)
                .unwrap_or(0);
        }
    }

    /// Whether the drawer is showing.
    pub const fn drawer_open(&self) -> bool {
        self.drawer.open
    }

    /// Entry under the drawer highlight.
    pub const fn drawer_highlight(&self) -> DrawerItem {
        DrawerItem::ALL[self.drawer.highlighted]
    }

    /// Move the drawer highlight, wrapping.
    pub const fn move_drawer_highlight(&mut self, forward: bool) {
        let len = DrawerItem::ALL.len();
        self.drawer.highlighted = if forward {
            (self.drawer.highlighted + 1) % len
        } else {
            (self.drawer.highlighted + len - 1) % len
        };
    }
}
