use pie_core::{layout, layout_with, DataItem, LayoutOptions, PieSort};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize) -> Vec<DataItem> {
    (0..n)
        .map(|i| DataItem::new(format!("item{i}"), ((i as f64 * 0.37).sin() + 1.5) * 10.0))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[8usize, 64usize, 1_024usize] {
        let data = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("input_n{n}")), &n, |b, _| {
            b.iter(|| { let _ = black_box(layout(&data)); });
        });
        let opts = LayoutOptions { sort: PieSort::Descending };
        group.bench_with_input(BenchmarkId::from_parameter(format!("desc_n{n}")), &n, |b, _| {
            b.iter_batched(
                || data.clone(),
                |d| { let _ = black_box(layout_with(&d, &opts)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
