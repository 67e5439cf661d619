use criterion::{Criterion, criterion_group, criterion_main};
use layout_fit_rows::{layout_centered, layout_left_aligned};
use layout_util::{ItemBox, LayoutContext};
use std::hint::black_box;

/// Build a deterministic gallery of thumbnails with varied widths and heights.
fn build_items(count: usize) -> Vec<ItemBox> {
    (0..count)
        .map(|index| {
            let width = 80.0 + (index % 7) as f32 * 23.0;
            let height = 60.0 + (index % 5) as f32 * 17.0;
            ItemBox::new(width, height)
        })
        .collect()
}

fn bench_fit_rows(crit: &mut Criterion) {
    let items = build_items(4096);
    let context = LayoutContext::new(1170.0, 30.0);
    crit.bench_function("fit_rows_left_aligned_4096", |bench| {
        bench.iter(|| black_box(layout_left_aligned(black_box(&items), context)));
    });
    crit.bench_function("fit_rows_centered_4096", |bench| {
        bench.iter(|| black_box(layout_centered(black_box(&items), context)));
    });
}

criterion_group!(fit_rows_benches, bench_fit_rows);
criterion_main!(fit_rows_benches);
