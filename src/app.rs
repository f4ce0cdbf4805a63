//! App: owns the store and navigator, routes input and composes frames.
//!
//! ```text
//!  InputActor ──InputEvent──▶ App::handle_event ──Intent──▶ Store
//!                                   │
//!                                   ▼
//!                            App::render ──Canvas──▶ FrameWriter ──▶ stdout
//! ```
//!
//! Everything here runs on the main thread. The input actor only converts
//! and forwards terminal events.

use crate::actor::{InputActor, InputEvent, KeyCode};
use crate::buffer::{Canvas, Style};
use crate::layout::Rect;
use crate::nav::{Navigator, Route};
use crate::screen::{self, Theme};
use crate::store::Store;
use crate::terminal::{FrameWriter, SessionConfig, TerminalSession};
use crate::view::MenuAction;
use crate::widget::{HeaderBar, HeaderBarConfig, Widget};
use crossbeam_channel::bounded;
use std::io::{self, BufWriter};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// The application.
#[derive(Debug)]
pub struct App {
    store: Store,
    nav: Navigator,
    image_base_url: String,
    theme: Theme,
    viewport: Rect,
}

impl App {
    /// Create an app on the Home screen.
    pub fn new(store: Store, image_base_url: impl Into<String>) -> Self {
        Self {
            store,
            nav: Navigator::new(),
            image_base_url: image_base_url.into(),
            theme: Theme::DEFAULT,
            viewport: Rect::from_size(80, 24),
        }
    }

    /// The store.
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// The navigator.
    pub const fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Mutable navigator, for opening routes directly.
    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.nav
    }

    /// Record the terminal size used for layout.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::from_size(width, height);
    }

    fn layout(area: Rect) -> (Rect, Rect, Rect) {
        let (header, rest) = area.split_top(1);
        let (body, footer) = rest.split_bottom(1);
        (header, body, footer)
    }

    /// Apply one input event.
    pub fn handle_event(&mut self, event: &InputEvent) -> Control {
        match event {
            InputEvent::Resize { width, height } => {
                self.resize(*width, *height);
                return Control::Continue;
            }
            InputEvent::Shutdown => return Control::Quit,
            InputEvent::Error(message) => {
                tracing::warn!(%message, "input error");
                return Control::Continue;
            }
            InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers,
            } if modifiers.control => return Control::Quit,
            _ => {}
        }

        if self.nav.drawer_open() {
            self.handle_drawer(event);
            return Control::Continue;
        }

        let form_open =
            matches!(self.nav.current(), Route::DishDetail(view) if view.form().is_visible());
        if !form_open {
            if let InputEvent::Key { code, .. } = event {
                match code {
                    KeyCode::Char('q') => return Control::Quit,
                    KeyCode::Char('d') | KeyCode::F(2) => {
                        self.nav.toggle_drawer();
                        return Control::Continue;
                    }
                    _ => {}
                }
            }
        }

        self.handle_route(event);
        Control::Continue
    }

    fn handle_drawer(&mut self, event: &InputEvent) {
        let InputEvent::Key { code, .. } = event else {
            return;
        };
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.nav.move_drawer_highlight(false),
            KeyCode::Down | KeyCode::Char('j') => self.nav.move_drawer_highlight(true),
            KeyCode::Enter => self.nav.select_drawer(self.nav.drawer_highlight()),
            KeyCode::Esc | KeyCode::Char('d') | KeyCode::F(2) => self.nav.toggle_drawer(),
            _ => {}
        }
    }

    fn handle_route(&mut self, event: &InputEvent) {
        let (_, body, _) = Self::layout(self.viewport);
        let mut open = None;
        let consumed = match self.nav.current_mut() {
            Route::Home => false,
            Route::Menu(menu) => match menu.handle_input(event, self.store.state()) {
                MenuAction::None => false,
                MenuAction::Moved => true,
                MenuAction::Open(params) => {
                    open = Some(params);
                    true
                }
            },
            Route::DishDetail(view) => {
                if view.handle_input(event, &mut self.store) {
                    true
                } else if let Some(delta) = scroll_delta(event, body.height) {
                    let lines = screen::detail_lines(
                        &view.snapshot(self.store.state()),
                        &self.image_base_url,
                        body.width,
                        &self.theme,
                    )
                    .len();
                    view.scroll_by(delta, screen::max_scroll(lines, body.height));
                    true
                } else {
                    false
                }
            }
        };

        if let Some(params) = open {
            self.nav.navigate(Route::dish_detail(params));
            return;
        }
        if !consumed {
            if let InputEvent::Key {
                code: KeyCode::Esc | KeyCode::Backspace,
                ..
            } = event
            {
                self.nav.back();
            }
        }
    }

    /// Compose a full frame.
    pub fn render(&self, canvas: &mut Canvas) {
        let (header, body, footer) = Self::layout(canvas.area());
        let theme = &self.theme;
        let state = self.store.state();

        HeaderBar::new(HeaderBarConfig {
            bg: theme.primary,
            left_fg: theme.on_primary,
            center_fg: theme.on_primary,
            right_fg: theme.on_primary,
            bold_center: true,
        })
        .with_sections(" ≡", self.nav.title(), format!("♥ {} ", state.favorites().len()))
        .render(header, canvas);

        match self.nav.current() {
            Route::Home => screen::render_home(canvas, body, state, &self.image_base_url, theme),
            Route::Menu(menu) => screen::render_menu(canvas, body, menu, state, theme),
            Route::DishDetail(view) => {
                screen::render_detail(canvas, body, view, state, &self.image_base_url, theme);
            }
        }

        if self.nav.drawer_open() {
            screen::render_drawer(canvas, body, &self.nav, theme);
        }

        canvas.put_line(
            footer,
            &format!(" {}", self.hints()),
            Style::DEFAULT.fg(theme.muted).bg(theme.surface),
        );
    }

    fn hints(&self) -> &'static str {
        if self.nav.drawer_open() {
            return "↑↓ choose · enter open · esc close";
        }
        match self.nav.current() {
            Route::Home => "d drawer · q quit",
            Route::Menu(_) => "↑↓ select · enter details · d drawer · q quit",
            Route::DishDetail(view) if view.form().is_visible() => {
                "tab next field · ←→ rating · enter submit · esc cancel"
            }
            Route::DishDetail(_) => "f favorite · c comment · ↑↓ scroll · esc back",
        }
    }
}

fn scroll_delta(event: &InputEvent, page: u16) -> Option<i32> {
    let InputEvent::Key { code, .. } = event else {
        return None;
    };
    let page = i32::from(page.max(1));
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(-1),
        KeyCode::Down | KeyCode::Char('j') => Some(1),
        KeyCode::PageUp => Some(-page),
        KeyCode::PageDown => Some(page),
        KeyCode::Home => Some(i32::MIN),
        KeyCode::End => Some(i32::MAX),
        _ => None,
    }
}

/// Run the interactive event loop until the user quits.
pub fn run(app: &mut App, config: SessionConfig) -> io::Result<()> {
    let session = TerminalSession::enter(config)?;
    let (width, height) = session.size()?;
    app.resize(width, height);

    let (tx, rx) = bounded::<InputEvent>(64);
    let input = InputActor::spawn(tx, session.config().input_poll_timeout)?;

    let mut canvas = Canvas::new(width, height);
    let mut writer = FrameWriter::new();
    let mut out = BufWriter::new(io::stdout());
    app.render(&mut canvas);
    writer.write_frame(&canvas, &mut out)?;
    tracing::info!(width, height, "event loop started");

    'events: while let Ok(first) = rx.recv() {
        // Apply everything already queued before drawing once.
        for event in std::iter::once(first).chain(rx.try_iter()) {
            if let InputEvent::Resize { width, height } = event {
                canvas.resize(width, height);
                writer.invalidate();
            }
            if app.handle_event(&event) == Control::Quit {
                break 'events;
            }
        }
        canvas.clear();
        app.render(&mut canvas);
        writer.write_frame(&canvas, &mut out)?;
    }

    drop(rx);
    input.join();
    let stats = writer.stats();
    tracing::info!(
        frames = stats.frames,
        full_redraws = stats.full_redraws,
        rows = stats.rows_written,
        "event loop finished"
    );
    drop(session);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyModifiers;
    use crate::dataset::Dataset;
    use crate::model::DishId;

    fn app() -> App {
        let data = Dataset::embedded().unwrap();
        App::new(Store::new(data.catalog, data.comments), "http://localhost:3001/")
    }

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_event(&InputEvent::key(code))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_event(&InputEvent::ctrl('c')), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_event(&InputEvent::Shutdown), Control::Quit);
    }

    #[test]
    fn test_drawer_switches_to_menu() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(app.navigator().drawer_open());
        // 'q' is swallowed by the open drawer.
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Continue);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.navigator().drawer_open());
        assert_eq!(app.navigator().title(), "Menu");
    }

    #[test]
    fn test_menu_to_detail_and_back() {
        let mut app = app();
        app.nav.select_drawer(crate::nav::DrawerItem::Menu);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().title(), "Dish Details");

        press(&mut app, KeyCode::Char('f'));
        assert!(app.store().state().favorites().contains(DishId(1)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator().title(), "Menu");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator().title(), "Menu");
    }

    #[test]
    fn test_q_types_into_open_form() {
        let mut app = app();
        app.nav.select_drawer(crate::nav::DrawerItem::Menu);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Continue);
        assert_eq!(
            app.handle_event(&InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            Control::Quit
        );
    }

    #[test]
    fn test_render_header_and_footer() {
        let app = app();
        let mut canvas = Canvas::new(60, 10);
        app.render(&mut canvas);
        assert!(canvas.row_text(0).contains("Home"));
        assert!(canvas.row_text(0).ends_with("♥ 0"));
        assert_eq!(canvas.row_text(9), " d drawer · q quit");
    }
}
