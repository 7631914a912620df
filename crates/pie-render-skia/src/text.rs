// File: crates/pie-render-skia/src/text.rs
// Summary: Text shaper for the floating label using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    /// Shape `text` centered within `max_width`, wrapping when it does not fit.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, max_width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Center);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(max_width.max(1.0));
        paragraph
    }

    /// Draw `text` so its box is centered on `(cx, cy)`.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        color: skia::Color,
        max_width: f32,
    ) {
        let p = self.layout(text, size, color, max_width);
        let top = cy - p.height() * 0.5;
        p.paint(canvas, (cx - max_width * 0.5, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
