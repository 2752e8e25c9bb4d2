// File: crates/curve-core/src/geometry.rs
// Summary: Lightweight geometry helpers for logical-pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
    pub fn center_x(&self) -> f32 { self.left + self.width / 2.0 }
    pub fn center_y(&self) -> f32 { self.top + self.height / 2.0 }

    /// Plot rectangle left after reserving `insets` on a `width` x `height` surface.
    /// Width/height may come out zero or negative on tiny surfaces.
    pub fn plot_area(width: f32, height: f32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            width: width - insets.hsum() as f32,
            height: height - insets.vsum() as f32,
        }
    }

    pub fn is_drawable(&self) -> bool { self.width > 0.0 && self.height > 0.0 }
}
