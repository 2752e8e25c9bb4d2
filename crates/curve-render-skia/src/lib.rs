// File: crates/curve-render-skia/src/lib.rs
// Summary: Skia renderer crate; hosts the CPU raster surface and text shaping.

pub mod raster;
pub mod text;

pub use raster::{RasterError, RasterSurface};
pub use text::TextShaper;

use curve_core::CurveRenderer;

/// Render `series` into a fresh `width` x `height` logical surface and return PNG bytes.
pub fn render_png(
    renderer: &CurveRenderer,
    series: &[f64],
    x_label: &str,
    y_label: &str,
    width: f32,
    height: f32,
    dpr: f32,
) -> Result<Vec<u8>, RasterError> {
    let mut surface = RasterSurface::new(width, height, dpr)?;
    surface.set_draw_text(renderer.opts.draw_labels);
    renderer.render(&mut surface, series, x_label, y_label);
    surface.encode_png()
}
