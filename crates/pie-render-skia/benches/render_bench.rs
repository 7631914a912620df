use anyhow::Result;
use pie_core::{DataItem, PieConfig, PieLayout};
use pie_render_skia::{RenderOptions, RenderPie};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_pie(n: usize, size: f64) -> PieLayout {
    let data = (0..n).map(|i| DataItem::new(format!("w{i}"), (i % 7 + 1) as f64)).collect();
    let cfg = PieConfig::new(size + 120.0, size + 120.0, size, size);
    PieLayout::new(data, cfg).expect("valid pie")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[6usize, 48usize] {
        group.bench_function(format!("wedges_{n}"), |b| {
            let pie = build_pie(n, 400.0);
            let mut opts = RenderOptions::for_config(pie.config());
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = pie.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
