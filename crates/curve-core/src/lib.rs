// File: crates/curve-core/src/lib.rs
// Summary: Core library entry point; exports public API for curve scaling and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod surface;
pub mod view;
pub mod theme;

pub use chart::{CurveRenderer, RenderOptions};
pub use series::{CurvePayload, CurveStats, Series, SeriesError};
pub use axis::{compute_range, x_ticks, y_ticks, AxisRange, Tick};
pub use surface::{DrawOp, DrawingSurface, PathData, RecordingSurface, Stroke, TextAlign, TextBaseline, TextStyle};
pub use view::CurveView;
pub use theme::Theme;
pub use types::Insets;
