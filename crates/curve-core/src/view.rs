// File: crates/curve-core/src/view.rs
// Summary: View state for the detection page: the last rendered curve, replayed on resize.

use crate::chart::CurveRenderer;
use crate::series::{Series, DEFAULT_X_AXIS_NAME, DEFAULT_Y_AXIS_NAME};
use crate::surface::DrawingSurface;

/// Holds at most one series (the last one shown), so no eviction is needed.
#[derive(Clone, Debug)]
pub struct CurveView {
    pub series: Series,
    pub x_label: String,
    pub y_label: String,
}

impl Default for CurveView {
    fn default() -> Self {
        Self {
            series: Series::default(),
            x_label: DEFAULT_X_AXIS_NAME.to_string(),
            y_label: DEFAULT_Y_AXIS_NAME.to_string(),
        }
    }
}

impl CurveView {
    pub fn new() -> Self { Self::default() }

    /// Replace the cached curve and paint it.
    pub fn show<S: DrawingSurface + ?Sized>(
        &mut self,
        renderer: &CurveRenderer,
        surface: &mut S,
        series: Series,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) {
        self.series = series;
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        renderer.render(surface, self.series.values(), &self.x_label, &self.y_label);
    }

    /// Repaint the cached curve after a layout change. Returns `false` when
    /// there is nothing to replay.
    pub fn redraw<S: DrawingSurface + ?Sized>(&self, renderer: &CurveRenderer, surface: &mut S) -> bool {
        if self.series.is_empty() {
            return false;
        }
        renderer.render(surface, self.series.values(), &self.x_label, &self.y_label);
        true
    }

    pub fn clear(&mut self) { *self = Self::default(); }

    pub fn has_curve(&self) -> bool { !self.series.is_empty() }
}
