// File: crates/pie-render-skia/src/chart.rs
// Summary: Headless pie rendering pipeline (PNG file, PNG bytes, RGBA8) using Skia CPU raster surfaces.

use anyhow::Result;
use pie_core::{ArcParams, PieConfig, PieLayout, Point};
use skia_safe as skia;
use tracing::debug;

use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_labels: bool,
    pub label_size: f32,
    /// Font collection shared by every render made with these options.
    pub shaper: TextShaper,
}

impl RenderOptions {
    /// Surface sized to the host view of `cfg`. The highlighted wedge may extend past
    /// the pie box, so the surface keeps a little extra room at the bottom.
    pub fn for_config(cfg: &PieConfig) -> Self {
        Self {
            width: cfg.width.ceil() as i32,
            height: (cfg.height + 10.0).ceil() as i32,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        let cfg = PieConfig::default();
        Self {
            width: cfg.width as i32,
            height: cfg.height as i32 + 10,
            theme: Theme::dark(),
            draw_labels: true,
            label_size: 20.0,
            shaper: TextShaper::new(),
        }
    }
}

/// Rendering entry points for a laid-out pie.
pub trait RenderPie {
    /// Render to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()>;
    /// Render and return encoded PNG bytes.
    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>>;
    /// Render and return `(pixels, width, height, row_bytes)` as unpremultiplied RGBA8.
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)>;
}

impl RenderPie for PieLayout {
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = draw_surface(self, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = draw_surface(self, opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} pixels");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_surface(pie: &PieLayout, opts: &RenderOptions) -> Result<skia::Surface> {
    if opts.width <= 0 || opts.height <= 0 {
        anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    let center = pie.geometry().center;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (wedge, arc) in pie.wedges().iter().zip(pie.arcs()) {
        if wedge.span() <= 0.0 {
            continue;
        }
        fill.set_color(opts.theme.color(wedge.index));
        canvas.draw_path(&wedge_path(center, &arc), &fill);
    }

    if opts.draw_labels {
        if let Some(label) = pie.label() {
            opts.shaper.draw_centered(
                canvas,
                label.text,
                label.anchor.x as f32,
                label.anchor.y as f32,
                opts.label_size,
                opts.theme.label,
                label.max_width as f32,
            );
        }
    }
    debug!(width = opts.width, height = opts.height, wedges = pie.wedges().len(), "pie rendered");
    Ok(surface)
}

/// Closed outline of one ring segment: outer arc clockwise, inner arc back.
/// Wedge angles are clockwise from 12 o'clock; Skia's are clockwise from 3 o'clock.
fn wedge_path(center: Point, arc: &ArcParams) -> skia::Path {
    let pad = arc.padded_angles();
    let (cx, cy) = (center.x as f32, center.y as f32);
    let oval = |r: f64| {
        let r = r as f32;
        skia::Rect::from_ltrb(cx - r, cy - r, cx + r, cy + r)
    };

    let mut path = skia::Path::new();
    add_arc(&mut path, oval(arc.outer_radius), pad.outer_start, pad.outer_end, true);
    if arc.inner_radius > 0.0 {
        add_arc(&mut path, oval(arc.inner_radius), pad.inner_end, pad.inner_start, false);
    } else {
        path.line_to((cx, cy));
    }
    path.close();
    path
}

/// Append an arc from `from` to `to` (wedge angles). Split in halves so a full
/// turn is not collapsed to an empty sweep.
fn add_arc(path: &mut skia::Path, oval: skia::Rect, from: f64, to: f64, force_move_to: bool) {
    let start = (from.to_degrees() - 90.0) as f32;
    let half = ((to - from).to_degrees() * 0.5) as f32;
    path.arc_to(oval, start, half, force_move_to);
    path.arc_to(oval, start + half, half, false);
}
