//! Benchmarks for geometry lookups and tile virtualization.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tilegrid::layout::{Axis, GridLayout};
use tilegrid::render::{RecordingFactory, RecordingSurface};
use tilegrid::{Grid, GridConfig};

fn layout() -> GridLayout {
    GridLayout::new(&GridConfig::default())
}

/// Offset and reverse lookup at the far end of 100k rows
fn bench_lookups(c: &mut Criterion) {
    let mut layout = layout();
    for row in (0..100_000).step_by(7) {
        layout.set_size(Axis::Row, row, 40);
    }

    c.bench_function("cumulative_offset_row_99999", |b| {
        b.iter(|| layout.cumulative_offset(Axis::Row, black_box(99_999)))
    });

    let total = layout.total(Axis::Row) as f64;
    c.bench_function("pixel_to_index_row", |b| {
        b.iter(|| layout.pixel_to_index(Axis::Row, black_box(total * 0.6)))
    });
}

/// Resizing a single row must not scale with the row count
fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_size");
    for index in [0u32, 50_000, 99_999] {
        let mut layout = layout();
        group.bench_with_input(BenchmarkId::from_parameter(index), &index, |b, &index| {
            let mut size = 28;
            b.iter(|| {
                size = if size == 28 { 40 } else { 28 };
                layout.set_size(Axis::Row, black_box(index), size)
            });
        });
    }
    group.finish();
}

/// Scrolling to a new window: release stale tiles, create and draw new ones
fn bench_scroll_render(c: &mut Criterion) {
    let mut grid = Grid::new(
        GridConfig::default(),
        RecordingFactory::new(),
        RecordingSurface::new(),
        RecordingSurface::new(),
        1200.0,
        800.0,
    )
    .expect("grid");
    let rows = r#"[{"a":1,"b":2,"c":"three"},{"a":4,"b":5,"c":"six"}]"#;
    grid.load_json_rows(rows).expect("load");

    let mut far = false;
    c.bench_function("scroll_render_tiles", |b| {
        b.iter(|| {
            far = !far;
            let y = if far { 1_680_000.0 } else { 0.0 };
            grid.scroll_to(0.0, black_box(y))
        })
    });
}

criterion_group!(benches, bench_lookups, bench_resize, bench_scroll_render);
criterion_main!(benches);
