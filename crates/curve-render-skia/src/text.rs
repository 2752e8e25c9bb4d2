// File: crates/curve-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; places labels by alignment and baseline.

use curve_core::surface::{TextAlign, TextBaseline, TextStyle as LabelStyle};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
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
        // CJK-capable families first; axis titles are usually Chinese
        ts.set_font_families(&[
            "Microsoft YaHei", "PingFang SC", "Noto Sans CJK SC", "Source Han Sans SC",
            "Segoe UI", "Arial", "DejaVu Sans", "sans-serif",
        ]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` anchored at `(x, y)` in the canvas' current coordinate space.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let p = self.layout(text, style.size, style.color);
        let (w, h) = (p.longest_line(), p.height());
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - w / 2.0,
            TextAlign::Right => x - w,
        };
        let top = match style.baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - h / 2.0,
            TextBaseline::Bottom => y - h,
        };
        // Paragraph paints from its top-left corner
        p.paint(canvas, (left, top));
    }
}
