// File: crates/pie-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use pie_core::series::from_pairs;
use pie_core::{PieConfig, PieLayout};
use pie_render_skia::{RenderOptions, RenderPie};

#[test]
fn render_smoke_png() {
    let data = from_pairs([("Rent", 1200.0), ("Food", 450.0), ("Travel", 300.0), ("Other", 150.0)]);
    let cfg = PieConfig::default();
    let pie = PieLayout::new(data, cfg).expect("valid pie");

    let opts = RenderOptions::for_config(&cfg);
    let out = std::path::PathBuf::from("target/test_out/pie_smoke.png");
    pie.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = pie.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn zero_sized_surface_is_an_error() {
    let pie = PieLayout::try_from(from_pairs([("a", 1.0)])).expect("valid pie");
    let mut opts = RenderOptions::default();
    opts.width = 0;
    assert!(pie.render_to_png_bytes(&opts).is_err());
}

#[test]
fn repeated_renders_with_one_options_value_match() {
    let mut pie = PieLayout::try_from(from_pairs([("Rent", 3.0), ("Food", 1.0)])).expect("valid pie");
    let opts = RenderOptions::default();
    assert!(opts.draw_labels);
    let first = pie.render_to_png_bytes(&opts).expect("first render");
    let second = pie.render_to_png_bytes(&opts).expect("second render");
    assert_eq!(first, second);

    // selecting Food redraws with the same shaper
    let g = *pie.geometry();
    pie.tap(g.point_at(1.75 * std::f64::consts::PI, 80.0), &mut |_: usize| {});
    let third = pie.render_to_png_bytes(&opts).expect("third render");
    assert_ne!(first, third);
}
