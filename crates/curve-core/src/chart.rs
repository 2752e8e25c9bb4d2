// File: crates/curve-core/src/chart.rs
// Summary: Curve renderer: sizes the surface, then paints grid, axes, ticks, titles and the series.

use log::debug;

use crate::axis::{compute_range, x_ticks, y_ticks, AxisRange, X_TICKS, Y_TICKS};
use crate::geometry::{Point, RectF};
use crate::scale::{IndexScale, ValueScale};
use crate::surface::{DrawingSurface, PathData, Stroke, TextAlign, TextBaseline, TextStyle};
use crate::theme::Theme;
use crate::types::{floored_size, Insets};

const GRID_WIDTH: f32 = 1.0;
const AXIS_WIDTH: f32 = 1.2;
const LINE_WIDTH: f32 = 1.6;
const MARKER_RADIUS: f32 = 2.5;
/// Offset that centres 1px strokes on a device pixel.
const CRISP: f32 = 0.5;
const TICK_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 13.0;
/// Gap between the plot edge and tick text.
const TICK_GAP: f32 = 8.0;
const X_TITLE_BOTTOM_GAP: f32 = 4.0;
/// Horizontal position of the rotated y title's anchor.
const Y_TITLE_X: f32 = 14.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub insets: Insets,
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// Skip tick labels and axis titles (deterministic pixel tests).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            insets: Insets::default(),
            x_ticks: X_TICKS,
            y_ticks: Y_TICKS,
            draw_labels: true,
        }
    }
}

/// Stateless renderer; every call recomputes layout from the surface's current size.
#[derive(Clone, Debug, Default)]
pub struct CurveRenderer {
    pub opts: RenderOptions,
}

impl CurveRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Paint `series` onto `surface`. An empty series or a plot area with no
    /// room leaves only the background.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        series: &[f64],
        x_label: &str,
        y_label: &str,
    ) {
        let (client_w, client_h) = surface.client_size();
        let (width, height) = floored_size(client_w, client_h);
        let dpr = effective_dpr(surface.device_pixel_ratio());
        surface.resize_backing((width * dpr).floor() as u32, (height * dpr).floor() as u32);
        surface.set_scale(dpr);
        surface.clear();
        surface.fill_rect(RectF::from_ltwh(0.0, 0.0, width, height), self.opts.theme.background);

        let plot = RectF::plot_area(width, height, &self.opts.insets);
        let Some(range) = compute_range(series) else {
            debug!("render: empty series, background only ({width}x{height})");
            return;
        };
        if !plot.is_drawable() {
            debug!("render: plot area {}x{} has no room", plot.width, plot.height);
            return;
        }

        self.draw_grid(surface, &plot);
        self.draw_axes(surface, &plot);
        if self.opts.draw_labels {
            self.draw_tick_labels(surface, &plot, &range, series.len());
            self.draw_titles(surface, &plot, height, x_label, y_label);
        }
        self.draw_series(surface, &plot, &range, series);
        debug!("render: {} points on {width}x{height} @{dpr}x", series.len());
    }

    fn draw_grid<S: DrawingSurface + ?Sized>(&self, surface: &mut S, plot: &RectF) {
        let xt = self.opts.x_ticks.max(1);
        let yt = self.opts.y_ticks.max(1);
        let mut path = PathData::with_capacity(2 * (xt + yt + 2));
        for i in 0..=xt {
            let x = plot.left + plot.width * i as f32 / xt as f32 + CRISP;
            path.move_to((x, plot.top)).line_to((x, plot.bottom()));
        }
        for i in 0..=yt {
            let y = plot.top + plot.height * i as f32 / yt as f32 + CRISP;
            path.move_to((plot.left, y)).line_to((plot.right(), y));
        }
        surface.stroke_path(&path, &Stroke { color: self.opts.theme.grid, width: GRID_WIDTH });
    }

    fn draw_axes<S: DrawingSurface + ?Sized>(&self, surface: &mut S, plot: &RectF) {
        let mut path = PathData::with_capacity(3);
        path.move_to((plot.left + CRISP, plot.top))
            .line_to((plot.left + CRISP, plot.bottom()))
            .line_to((plot.right(), plot.bottom() + CRISP));
        surface.stroke_path(&path, &Stroke { color: self.opts.theme.axis_line, width: AXIS_WIDTH });
    }

    fn draw_tick_labels<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        plot: &RectF,
        range: &AxisRange,
        len: usize,
    ) {
        let y_style = TextStyle {
            size: TICK_FONT,
            color: self.opts.theme.tick,
            align: TextAlign::Right,
            baseline: TextBaseline::Middle,
        };
        for tick in y_ticks(range, self.opts.y_ticks) {
            let y = plot.top + plot.height * tick.fraction as f32;
            surface.fill_text(&tick.label, Point::new(plot.left - TICK_GAP, y), &y_style);
        }

        let x_style = TextStyle { align: TextAlign::Center, baseline: TextBaseline::Top, ..y_style };
        for tick in x_ticks(len, self.opts.x_ticks) {
            let x = plot.left + plot.width * tick.fraction as f32;
            surface.fill_text(&tick.label, Point::new(x, plot.bottom() + TICK_GAP), &x_style);
        }
    }

    fn draw_titles<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        plot: &RectF,
        height: f32,
        x_label: &str,
        y_label: &str,
    ) {
        let style = TextStyle {
            size: TITLE_FONT,
            color: self.opts.theme.axis_label,
            align: TextAlign::Center,
            baseline: TextBaseline::Bottom,
        };
        surface.fill_text(x_label, Point::new(plot.center_x(), height - X_TITLE_BOTTOM_GAP), &style);

        surface.save();
        surface.translate(Y_TITLE_X, plot.center_y());
        surface.rotate(-std::f32::consts::FRAC_PI_2);
        let rotated = TextStyle { baseline: TextBaseline::Top, ..style };
        surface.fill_text(y_label, Point::new(0.0, 0.0), &rotated);
        surface.restore();
    }

    fn draw_series<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        plot: &RectF,
        range: &AxisRange,
        series: &[f64],
    ) {
        let xs = IndexScale::new(plot, series.len());
        let ys = ValueScale::for_range(plot, range);
        let color = self.opts.theme.line_stroke;

        if let [only] = series {
            let center = Point::new(xs.to_px(0.0), ys.to_px(*only));
            surface.fill_circle(center, MARKER_RADIUS, color);
            return;
        }

        let mut path = PathData::with_capacity(series.len());
        for (i, &v) in series.iter().enumerate() {
            let p = Point::new(xs.to_px(i as f64), ys.to_px(v));
            if i == 0 { path.move_to(p); } else { path.line_to(p); }
        }
        surface.stroke_path(&path, &Stroke { color, width: LINE_WIDTH });
    }
}

/// Missing or nonsensical ratios behave like a standard-density display.
fn effective_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}
