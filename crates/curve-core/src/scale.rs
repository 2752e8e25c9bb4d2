// File: crates/curve-core/src/scale.rs
// Summary: Index (X) and Value (Y) scale transforms from data space to logical pixels.

use crate::axis::AxisRange;
use crate::geometry::RectF;

/// Horizontal scale spreading `len` samples evenly over `[left_px, left_px + width_px]`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f32,
    pub width_px: f32,
    pub len: usize,
}

impl IndexScale {
    pub fn new(plot: &RectF, len: usize) -> Self {
        Self { left_px: plot.left, width_px: plot.width, len }
    }
    /// First sample on the left edge, last on the right edge.
    /// Zero or one sample sits at the horizontal centre.
    #[inline]
    pub fn to_px(&self, i: f64) -> f32 {
        if self.len <= 1 {
            return self.left_px + self.width_px / 2.0;
        }
        self.left_px + ((self.width_px as f64 * i) / (self.len - 1) as f64) as f32
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`;
/// larger values plot higher.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    /// Scale over the padded domain of `range` inside `plot`.
    pub fn for_range(plot: &RectF, range: &AxisRange) -> Self {
        Self::new_linear(plot.top, plot.bottom(), range.padded_min, range.padded_max)
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = self.vmax - self.vmin;
        let h = (self.bottom_px - self.top_px) as f64;
        self.top_px + ((self.vmax - y) / span * h) as f32
    }
}
