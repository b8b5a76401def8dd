//! Benchmarks for window recomputation and frame processing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use framemenu_core::{Control, NullAudio, RecordingCanvas};
use framemenu_test::{numbered_items, numbered_menu, ScriptedInput};
use framemenu_widgets::{MenuRegistry, WindowState};

fn bench_window_slide(c: &mut Criterion) {
    let items = numbered_items(1000);
    let mut state = WindowState::new();

    c.bench_function("window_slide_1000_items", |b| {
        let mut selected = 0;
        b.iter(|| {
            selected = (selected + 1) % 1000;
            state.recompute(&items, black_box(selected), 10)
        })
    });
}

fn bench_window_with_hidden_items(c: &mut Criterion) {
    let mut items = numbered_items(1000);
    for (i, item) in items.iter_mut().enumerate() {
        item.set_visible(i % 3 != 0);
    }
    let mut state = WindowState::new();

    c.bench_function("window_jump_sparse_items", |b| {
        let mut selected = 0;
        b.iter(|| {
            selected = (selected + 337) % 1000;
            state.recompute(&items, black_box(selected), 10)
        })
    });
}

fn bench_frame_holding_down(c: &mut Criterion) {
    let mut registry = MenuRegistry::new();
    let id = registry.add(numbered_menu("Bench", 200));
    let _ = registry.show(id);
    let mut input = ScriptedInput::new();
    input.hold(Control::FrontendDown);
    let mut audio = NullAudio;

    c.bench_function("process_frame_200_items", |b| {
        b.iter(|| registry.process_frame(black_box(&mut input), &mut audio))
    });
}

fn bench_draw_frame(c: &mut Criterion) {
    let mut registry = MenuRegistry::new();
    let id = registry.add(numbered_menu("Bench", 200));
    let _ = registry.show(id);
    let mut canvas = RecordingCanvas::new();

    c.bench_function("draw_frame_200_items", |b| {
        b.iter(|| {
            canvas.clear();
            registry.draw_frame(black_box(&mut canvas));
        })
    });
}

criterion_group!(
    benches,
    bench_window_slide,
    bench_window_with_hidden_items,
    bench_frame_holding_down,
    bench_draw_frame
);
criterion_main!(benches);
