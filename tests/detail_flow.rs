//! Drives the app headlessly from the menu to a dish, favorites it and posts
//! a comment, checking the emitted frames with a terminal emulator.

use menuboard::dataset::Dataset;
use menuboard::model::DishId;
use menuboard::nav::{DrawerItem, Route};
use menuboard::store::{FixedClock, Store};
use menuboard::terminal::FrameWriter;
use menuboard::view::{DetailParams, FormVisibility};
use menuboard::{App, Canvas, InputEvent, KeyCode};
use time::macros::datetime;

const COLS: u16 = 80;
const ROWS: u16 = 40;

struct Harness {
    app: App,
    canvas: Canvas,
    writer: FrameWriter,
    parser: vt100::Parser,
}

impl Harness {
    fn new() -> Self {
        let data = Dataset::embedded().unwrap();
        let clock = FixedClock::new(datetime!(2024-03-01 12:30 UTC));
        let store = Store::with_clock(data.catalog, data.comments, Box::new(clock));
        let mut app = App::new(store, "http://localhost:3001/");
        app.resize(COLS, ROWS);
        Self {
            app,
            canvas: Canvas::new(COLS, ROWS),
            writer: FrameWriter::new(),
            parser: vt100::Parser::new(ROWS, COLS, 0),
        }
    }

    fn press(&mut self, code: KeyCode) {
        self.app.handle_event(&InputEvent::key(code));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    fn screen(&mut self) -> String {
        self.canvas.clear();
        self.app.render(&mut self.canvas);
        let mut out = Vec::new();
        self.writer.write_frame(&self.canvas, &mut out).unwrap();
        self.parser.process(&out);
        self.parser.screen().contents()
    }

    fn comments_for(&self, id: DishId) -> usize {
        self.app
            .store()
            .state()
            .comments()
            .iter()
            .filter(|c| c.dish_id == id)
            .count()
    }
}

#[test]
fn favorite_and_comment_on_dish_two() {
    let mut h = Harness::new();

    // Home -> drawer -> Menu -> third dish.
    h.press(KeyCode::Char('d'));
    h.press(KeyCode::Down);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Down);
    h.press(KeyCode::Down);
    h.press(KeyCode::Enter);
    assert_eq!(h.app.navigator().title(), "Dish Details");

    let screen = h.screen();
    assert!(screen.contains("Dish Details"));
    assert!(screen.contains("Vadonut"));
    assert!(screen.contains("is it a vada or is it a donut?"));
    assert!(screen.contains("image: http://localhost:3001/images/vadonut.png"));
    assert!(screen.contains("♡   ✎"));
    assert!(screen.contains("♥ 0"));
    assert_eq!(screen.matches("-- ").count(), 2);
    assert_eq!(h.comments_for(DishId(2)), 2);

    // Favorite it, twice; the set stays {2}.
    h.press(KeyCode::Char('f'));
    h.press(KeyCode::Char('f'));
    let favorites: Vec<DishId> = h.app.store().state().favorites().iter().collect();
    assert_eq!(favorites, vec![DishId(2)]);
    let screen = h.screen();
    assert!(screen.contains("♥ 1"));
    assert!(screen.contains("♥   ✎"));
    assert!(!screen.contains('♡'));

    // Open the form, rate 4, fill both fields and submit from the comment field.
    h.press(KeyCode::Char('c'));
    assert!(h.screen().contains("Add a comment"));
    h.press(KeyCode::Left);
    h.press(KeyCode::Tab);
    h.type_text("Ada");
    h.press(KeyCode::Tab);
    h.type_text("Light and crisp");
    h.press(KeyCode::Enter);

    assert_eq!(h.comments_for(DishId(2)), 3);
    let added = h.app.store().state().comments().last().unwrap().clone();
    assert_eq!(added.rating.stars(), 4);
    assert_eq!(added.author, "Ada");
    assert_eq!(added.comment, "Light and crisp");

    match h.app.navigator().current() {
        Route::DishDetail(view) => {
            assert_eq!(view.form().visibility(), FormVisibility::Hidden);
            assert!(view.form().draft().author.is_empty());
        }
        other => panic!("unexpected route {other:?}"),
    }

    let screen = h.screen();
    assert!(!screen.contains("Add a comment"));
    assert!(screen.contains("Light and crisp"));
    assert!(screen.contains("★★★★☆  Very Good"));
    assert!(screen.contains("-- Ada, 01-Mar-2024 12:30 PM"));
    assert_eq!(screen.matches("-- ").count(), 3);
}

#[test]
fn cancel_leaves_comments_untouched() {
    let mut h = Harness::new();
    h.app.navigator_mut().select_drawer(DrawerItem::Menu);
    h.press(KeyCode::Enter);

    h.press(KeyCode::Char('c'));
    h.press(KeyCode::Tab);
    h.type_text("Nobody");
    h.press(KeyCode::Esc);

    assert_eq!(h.comments_for(DishId(0)), 3);
    assert!(!h.screen().contains("Add a comment"));

    // Esc again leaves the detail screen.
    h.press(KeyCode::Esc);
    assert_eq!(h.app.navigator().title(), "Menu");
}

#[test]
fn unknown_dish_renders_empty_body() {
    let mut h = Harness::new();
    let nav = h.app.navigator_mut();
    nav.select_drawer(DrawerItem::Menu);
    nav.navigate(Route::dish_detail(DetailParams::new("9")));

    let screen = h.screen();
    assert!(screen.contains("Dish Details"));
    assert!(!screen.contains("Comments"));
    assert!(!screen.contains('♡'));

    // Neither key does anything without a dish.
    h.press(KeyCode::Char('f'));
    h.press(KeyCode::Char('c'));
    assert!(h.app.store().state().favorites().is_empty());
    assert!(!h.screen().contains("Add a comment"));
}
