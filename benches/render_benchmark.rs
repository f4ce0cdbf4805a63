//! Render benchmark: compose and emit the detail screen.
//!
//! Measures full composition into a canvas, then the diffing writer for an
//! unchanged frame and for a frame with one changed row.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use menuboard::dataset::Dataset;
use menuboard::store::Store;
use menuboard::{App, Canvas, InputEvent, KeyCode};
use menuboard::terminal::FrameWriter;

fn detail_app() -> App {
    let data = Dataset::embedded().expect("embedded dataset");
    let mut app = App::new(Store::new(data.catalog, data.comments), "http://localhost:3001/");
    for code in [KeyCode::Char('d'), KeyCode::Down, KeyCode::Enter, KeyCode::Enter] {
        app.handle_event(&InputEvent::key(code));
    }
    app
}

fn compose_detail(c: &mut Criterion) {
    let app = detail_app();
    let mut canvas = Canvas::new(120, 40);

    c.bench_function("compose_detail_120x40", |b| {
        b.iter(|| {
            canvas.clear();
            app.render(black_box(&mut canvas));
        });
    });
}

fn write_unchanged(c: &mut Criterion) {
    let app = detail_app();
    let mut canvas = Canvas::new(120, 40);
    app.render(&mut canvas);
    let mut writer = FrameWriter::new();
    let mut out = Vec::with_capacity(64 * 1024);
    writer.write_frame(&canvas, &mut out).expect("first frame");

    c.bench_function("write_unchanged_frame", |b| {
        b.iter(|| {
            out.clear();
            writer.write_frame(black_box(&canvas), &mut out).expect("frame")
        });
    });
}

fn write_favorite_toggle(c: &mut Criterion) {
    let mut app = detail_app();
    let mut before = Canvas::new(120, 40);
    app.render(&mut before);
    app.handle_event(&InputEvent::key(KeyCode::Char('f')));
    let mut after = Canvas::new(120, 40);
    app.render(&mut after);

    let mut writer = FrameWriter::new();
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("write_favorite_toggle", |b| {
        b.iter(|| {
            out.clear();
            writer.write_frame(&before, &mut out).expect("frame");
            out.clear();
            writer.write_frame(black_box(&after), &mut out).expect("frame")
        });
    });
}

criterion_group!(benches, compose_detail, write_unchanged, write_favorite_toggle);
criterion_main!(benches);
