// File: crates/curve-core/src/types.rs
// Summary: Shared types and constants (surface floor, margins).

/// Minimum logical surface width in pixels.
pub const MIN_WIDTH: f32 = 320.0;
/// Minimum logical surface height in pixels.
pub const MIN_HEIGHT: f32 = 220.0;

/// Screen margins around the plot rectangle, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for tick text on the left and the x title underneath.
    fn default() -> Self {
        Self::new(64, 16, 20, 48)
    }
}

/// Logical surface size after applying the [`MIN_WIDTH`] x [`MIN_HEIGHT`] floor.
/// Layout sizes are truncated to whole pixels first.
pub fn floored_size(client_w: f32, client_h: f32) -> (f32, f32) {
    let w = if client_w.is_finite() { client_w.floor() } else { 0.0 };
    let h = if client_h.is_finite() { client_h.floor() } else { 0.0 };
    (w.max(MIN_WIDTH), h.max(MIN_HEIGHT))
}
