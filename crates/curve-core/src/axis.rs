// File: crates/curve-core/src/axis.rs
// Summary: Axis scaling: padded value range and fixed-count tick sets for a single series.

use crate::grid::{fractions, linspace};

/// Tick divisions on the sample-index (x) axis.
pub const X_TICKS: usize = 6;
/// Tick divisions on the value (y) axis.
pub const Y_TICKS: usize = 5;
/// Fraction of the raw span added above and below the data.
pub const PAD_FRACTION: f64 = 0.08;
/// Spans narrower than this are widened to one unit.
pub const MIN_SPAN: f64 = 1e-9;

/// Raw extrema of a series plus the padded domain used for plotting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub padded_min: f64,
    pub padded_max: f64,
}

impl AxisRange {
    /// Build from raw extrema. A degenerate span is forced to `[min, min + 1]`.
    pub fn from_extrema(min: f64, mut max: f64) -> Self {
        if (max - min).abs() < MIN_SPAN {
            max = min + 1.0;
        }
        let pad = (max - min) * PAD_FRACTION;
        Self { min, max, padded_min: min - pad, padded_max: max + pad }
    }

    /// Width of the padded domain.
    pub fn span(&self) -> f64 { self.padded_max - self.padded_min }
}

/// Compute the plotting range of `series`; `None` when there is nothing to plot.
///
/// Non-finite samples are not filtered; callers supply clean data.
pub fn compute_range(series: &[f64]) -> Option<AxisRange> {
    if series.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in series {
        if v < min { min = v; }
        if v > max { max = v; }
    }
    Some(AxisRange::from_extrema(min, max))
}

/// A labelled reference mark. `fraction` is the offset along the plot extent,
/// measured top-to-bottom for the value axis and left-to-right for the index axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub fraction: f64,
    pub label: String,
}

/// `count + 1` value ticks from `padded_max` (top) down to `padded_min` (bottom).
pub fn y_ticks(range: &AxisRange, count: usize) -> Vec<Tick> {
    let count = count.max(1);
    let values = linspace(range.padded_max, range.padded_min, count + 1);
    fractions(count)
        .into_iter()
        .zip(values)
        .map(|(fraction, v)| Tick { fraction, label: to_fixed(v, 1) })
        .collect()
}

/// `count + 1` index ticks labelled with 1-based sample numbers.
/// A series of zero or one points labels every tick `1`.
pub fn x_ticks(len: usize, count: usize) -> Vec<Tick> {
    let count = count.max(1);
    let last = len.saturating_sub(1) as f64;
    fractions(count)
        .into_iter()
        .enumerate()
        .map(|(i, fraction)| {
            let idx = if len > 1 {
                (last * i as f64 / count as f64).round() as usize + 1
            } else {
                1
            };
            Tick { fraction, label: idx.to_string() }
        })
        .collect()
}

/// Fixed-point text with `digits` decimals. Exact halfway values round away
/// from zero (`0.25` -> `0.3`); negative zero prints unsigned.
pub fn to_fixed(v: f64, digits: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return if v.is_finite() { format!("{:.*}", digits, 0.0) } else { v.to_string() };
    }
    let mut mag = v.abs();
    if is_halfway(mag, digits) {
        mag = f64::from_bits(mag.to_bits() + 1);
    }
    let body = format!("{:.*}", digits, mag);
    if v < 0.0 { format!("-{body}") } else { body }
}

/// With `mag = m * 2^e` and `m` odd, `mag` sits exactly between two
/// `digits`-decimal neighbours iff `e == -(digits + 1)`.
fn is_halfway(mag: f64, digits: usize) -> bool {
    let bits = mag.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    mantissa != 0 && exp + i64::from(mantissa.trailing_zeros()) == -(digits as i64 + 1)
}
