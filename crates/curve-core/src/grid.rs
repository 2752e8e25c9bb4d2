// File: crates/curve-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced fractions `0, 1/divisions, ..., 1` (`divisions + 1` entries).
pub fn fractions(divisions: usize) -> Vec<f64> {
    if divisions == 0 { return vec![0.0]; }
    (0..=divisions).map(|i| i as f64 / divisions as f64).collect()
}
