// File: crates/curve-render-skia/src/raster.rs
// Summary: CPU raster DrawingSurface on a Skia surface, with PNG and RGBA8 export.

use std::path::Path;

use curve_core::geometry::{Point, RectF};
use curve_core::surface::{DrawingSurface, PathCmd, PathData, Stroke, TextStyle};
use log::warn;
use skia_safe as skia;
use thiserror::Error;

use crate::text::TextShaper;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to create {width}x{height} raster surface")]
    Allocation { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("read pixels failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Raster surface standing in for a canvas element: a logical layout box,
/// a device pixel ratio, and a backing store sized by the renderer.
pub struct RasterSurface {
    client: (f32, f32),
    dpr: f32,
    surface: skia::Surface,
    shaper: TextShaper,
    draw_text: bool,
}

impl RasterSurface {
    pub fn new(client_w: f32, client_h: f32, dpr: f32) -> Result<Self, RasterError> {
        let width = ((client_w * dpr).floor() as i32).max(1);
        let height = ((client_h * dpr).floor() as i32).max(1);
        Ok(Self {
            client: (client_w, client_h),
            dpr,
            surface: allocate(width, height)?,
            shaper: TextShaper::new(),
            draw_text: true,
        })
    }

    /// Emulate a layout change; takes effect on the next render.
    pub fn set_client_size(&mut self, client_w: f32, client_h: f32) {
        self.client = (client_w, client_h);
    }

    /// Disable glyph output (text layout varies across platforms).
    pub fn set_draw_text(&mut self, on: bool) { self.draw_text = on; }

    /// Backing store size in device pixels.
    pub fn backing_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>, RasterError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RasterError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write a PNG to `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels with width, height and row stride.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize), RasterError> {
        let (w, h) = self.backing_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(RasterError::ReadPixels);
        }
        Ok((px, w, h, stride))
    }
}

fn allocate(width: i32, height: i32) -> Result<skia::Surface, RasterError> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or(RasterError::Allocation { width, height })
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn to_skia_path(path: &PathData) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in &path.commands {
        match *cmd {
            PathCmd::MoveTo(p) => { out.move_to((p.x, p.y)); }
            PathCmd::LineTo(p) => { out.line_to((p.x, p.y)); }
        }
    }
    out
}

impl DrawingSurface for RasterSurface {
    fn client_size(&self) -> (f32, f32) { self.client }
    fn device_pixel_ratio(&self) -> f32 { self.dpr }

    fn resize_backing(&mut self, width: u32, height: u32) {
        let (w, h) = (width.max(1) as i32, height.max(1) as i32);
        if self.backing_size() != (w, h) {
            match allocate(w, h) {
                Ok(s) => self.surface = s,
                Err(e) => warn!("keeping previous backing store: {e}"),
            }
        }
        // a fresh backing store starts with no saved state
        let canvas = self.surface.canvas();
        canvas.restore_to_count(1);
        canvas.reset_matrix();
    }

    fn set_scale(&mut self, scale: f32) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.scale((scale, scale));
    }

    fn clear(&mut self) {
        self.surface.canvas().clear(skia::Color::TRANSPARENT);
    }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
        self.surface.canvas().draw_rect(r, &fill_paint(color));
    }

    fn stroke_path(&mut self, path: &PathData, stroke: &Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(stroke.color);
        self.surface.canvas().draw_path(&to_skia_path(path), &paint);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        self.surface.canvas().draw_circle((center.x, center.y), radius, &fill_paint(color));
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        if !self.draw_text || text.is_empty() {
            return;
        }
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, at.x, at.y, style);
    }

    fn save(&mut self) { self.surface.canvas().save(); }
    fn restore(&mut self) { self.surface.canvas().restore(); }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.surface.canvas().translate((dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.surface.canvas().rotate(radians.to_degrees(), None);
    }
}
