// File: crates/curve-core/src/series.rs
// Summary: Immutable sample series, summary statistics, and the curve payload model.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Default x-axis title when the payload omits one.
pub const DEFAULT_X_AXIS_NAME: &str = "数据点";
/// Default y-axis title when the payload omits one.
pub const DEFAULT_Y_AXIS_NAME: &str = "电压值";

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("sample {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },
}

/// Ordered samples from one detection curve. Never mutated after creation;
/// clones share the same buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Arc<[f64]>,
}

impl Series {
    /// Wrap `values` as-is. Non-finite samples are kept.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values: values.into() }
    }

    /// Like [`Series::new`] but rejects the first non-finite sample.
    pub fn finite(values: Vec<f64>) -> Result<Self, SeriesError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SeriesError::NonFinite { index, value });
        }
        Ok(Self::new(values))
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn stats(&self) -> Option<CurveStats> { CurveStats::of(&self.values) }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self { Self::new(values) }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self { Self { values: values.into() } }
}

/// Min / max / mean of a curve, shown next to the chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl CurveStats {
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() { return None; }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Some(Self { min, max, avg: sum / values.len() as f64 })
    }
}

/// Body of the curve endpoint for one sample.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePayload {
    #[serde(default)]
    pub adc_values: Vec<f64>,
    #[serde(default)]
    pub x_axis_name: Option<String>,
    #[serde(default)]
    pub y_axis_name: Option<String>,
    #[serde(default)]
    pub point_count: Option<usize>,
    #[serde(default)]
    pub stats: Option<CurveStats>,
}

impl CurvePayload {
    pub fn series(&self) -> Series { Series::from(self.adc_values.as_slice()) }

    pub fn x_label(&self) -> &str {
        non_empty(self.x_axis_name.as_deref()).unwrap_or(DEFAULT_X_AXIS_NAME)
    }

    pub fn y_label(&self) -> &str {
        non_empty(self.y_axis_name.as_deref()).unwrap_or(DEFAULT_Y_AXIS_NAME)
    }

    /// Server-side stats when present, else computed from the samples.
    pub fn stats_or_computed(&self) -> Option<CurveStats> {
        self.stats.or_else(|| CurveStats::of(&self.adc_values))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
