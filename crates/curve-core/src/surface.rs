// File: crates/curve-core/src/surface.rs
// Summary: Minimal drawing-surface capability used by the renderer, plus a recording implementation.

use skia_safe as skia;

use crate::geometry::{Point, RectF};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
}

/// Backend-neutral path made of move/line segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCmd>,
}

impl PathData {
    pub fn with_capacity(n: usize) -> Self {
        Self { commands: Vec::with_capacity(n) }
    }

    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.commands.push(PathCmd::MoveTo(p.into()));
        self
    }

    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.commands.push(PathCmd::LineTo(p.into()));
        self
    }

    /// Number of `MoveTo` commands, i.e. disjoint sub-paths.
    pub fn subpath_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).count()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().map(|c| match *c {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => p,
        })
    }
}

/// What the renderer needs from a pixel surface. Drawing coordinates are
/// logical pixels once [`DrawingSurface::set_scale`] has applied the
/// device pixel ratio.
pub trait DrawingSurface {
    /// Current layout box in logical pixels.
    fn client_size(&self) -> (f32, f32);
    /// Device pixels per logical pixel.
    fn device_pixel_ratio(&self) -> f32;
    /// Reallocate the backing store, in device pixels.
    fn resize_backing(&mut self, width: u32, height: u32);
    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f32);
    /// Make every pixel transparent.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: RectF, color: skia::Color);
    fn stroke_path(&mut self, path: &PathData, stroke: &Stroke);
    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color);
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Rotate by `radians`; negative is counter-clockwise on screen.
    fn rotate(&mut self, radians: f32);
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    ResizeBacking { width: u32, height: u32 },
    SetScale(f32),
    Clear,
    FillRect { rect: RectF, color: skia::Color },
    StrokePath { path: PathData, stroke: Stroke },
    FillCircle { center: Point, radius: f32, color: skia::Color },
    FillText { text: String, at: Point, style: TextStyle },
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Rotate(f32),
}

/// Headless surface that keeps a display list instead of pixels.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    client: (f32, f32),
    dpr: f32,
    backing: (u32, u32),
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(client_w: f32, client_h: f32, dpr: f32) -> Self {
        Self { client: (client_w, client_h), dpr, backing: (0, 0), ops: Vec::new() }
    }

    /// Emulate a layout change (e.g., window resize).
    pub fn set_client_size(&mut self, client_w: f32, client_h: f32) {
        self.client = (client_w, client_h);
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f32) { self.dpr = dpr; }

    pub fn backing_size(&self) -> (u32, u32) { self.backing }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// Forget recorded ops; backing size is kept.
    pub fn reset(&mut self) { self.ops.clear(); }

    pub fn stroked_paths(&self) -> impl Iterator<Item = (&PathData, &Stroke)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokePath { path, stroke } => Some((path, stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn client_size(&self) -> (f32, f32) { self.client }
    fn device_pixel_ratio(&self) -> f32 { self.dpr }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.ops.push(DrawOp::ResizeBacking { width, height });
    }

    fn set_scale(&mut self, scale: f32) { self.ops.push(DrawOp::SetScale(scale)); }
    fn clear(&mut self) { self.ops.push(DrawOp::Clear); }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_path(&mut self, path: &PathData, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokePath { path: path.clone(), stroke: *stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::FillText { text: text.to_string(), at, style: *style });
    }

    fn save(&mut self) { self.ops.push(DrawOp::Save); }
    fn restore(&mut self) { self.ops.push(DrawOp::Restore); }
    fn translate(&mut self, dx: f32, dy: f32) { self.ops.push(DrawOp::Translate { dx, dy }); }
    fn rotate(&mut self, radians: f32) { self.ops.push(DrawOp::Rotate(radians)); }
}
