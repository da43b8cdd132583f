use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ratatui::prelude::*;

use xptui::domain::classes::class_list;
use xptui::presentation::config::Styles;
use xptui::presentation::widgets::window::{ViewContext, WindowFrameWidget};

fn benchmark(c: &mut Criterion) {
    let styles: Styles = serde_json::from_str(
        r#"{
            "window": "black on white",
            "window-body": "black on white",
            "title-bar": "white on blue",
            "title-bar-controls": "white on blue"
        }"#,
    )
    .expect("valid styles");

    c.bench_function("class_list", |b| {
        b.iter(|| class_list(black_box([Some("window"), Some("wide tall"), None])))
    });

    c.bench_function("resolve_classes", |b| {
        b.iter(|| styles.resolve(black_box("window wide tall")))
    });

    c.bench_function("render_window_80x24", |b| {
        let area = Rect::new(0, 0, 80, 24);
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            let widget = WindowFrameWidget::new(
                black_box("The quick brown fox jumps over the lazy dog"),
                ViewContext { styles: &styles },
            )
            .title("Inbox")
            .class_name("wide");
            widget.render(area, &mut buf);
            black_box(&buf);
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
