#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::NORMALIZED_MAX;

/// A point in client (viewport) pixels, or in normalized 0–100 space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in client pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// An empty input range maps everything to `out_min`.
#[must_use]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 || !span.is_finite() {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / span
}

/// Map a client-space pointer onto the element's box as a `[0, 100]²` coordinate.
///
/// The box must be the one measured for this event; layout can move between
/// events.
#[must_use]
pub fn normalized_position(pointer: Point, rect: Rect) -> Point {
    Point {
        x: normalize_axis(pointer.x - rect.left, rect.width),
        y: normalize_axis(pointer.y - rect.top, rect.height),
    }
}

fn normalize_axis(offset: f64, extent: f64) -> f64 {
    let mapped = map_range(offset, 0.0, extent, 0.0, NORMALIZED_MAX);
    if mapped.is_nan() {
        return 0.0;
    }
    mapped.clamp(0.0, NORMALIZED_MAX)
}
