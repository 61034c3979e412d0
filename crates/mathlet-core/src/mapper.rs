// File: crates/mathlet-core/src/mapper.rs
// Summary: Math <-> pixel coordinate transforms over padded viewports.

use crate::geometry::Point;
use crate::types::{Bounds, Viewport};

/// Coordinate transform operations between math space and pixel space.
pub trait CoordinateTransform {
    fn to_pixel(&self, x: f64, y: f64) -> Point;
    fn to_math(&self, cx: f64, cy: f64) -> Point;
}

/// Map a math point into the padded pixel rectangle. Pixel y grows downward.
/// Degenerate bounds give inf/NaN; callers keep `x_min < x_max`, `y_min < y_max`.
#[inline]
pub fn math_to_pixel(x: f64, y: f64, bounds: &Bounds, viewport: &Viewport) -> Point {
    let cx = viewport.padding + (x - bounds.x_min) / bounds.x_span() * viewport.plot_width();
    let cy = viewport.padding + (bounds.y_max - y) / bounds.y_span() * viewport.plot_height();
    Point { x: cx, y: cy }
}

/// Inverse of [`math_to_pixel`].
#[inline]
pub fn pixel_to_math(cx: f64, cy: f64, bounds: &Bounds, viewport: &Viewport) -> Point {
    let x = bounds.x_min + (cx - viewport.padding) / viewport.plot_width() * bounds.x_span();
    let y = bounds.y_max - (cy - viewport.padding) / viewport.plot_height() * bounds.y_span();
    Point { x, y }
}

/// Bounds and viewport bundled for repeated mapping within one draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub bounds: Bounds,
    pub viewport: Viewport,
}

impl CoordinateMapper {
    pub const fn new(bounds: Bounds, viewport: Viewport) -> Self {
        Self { bounds, viewport }
    }
}

impl CoordinateTransform for CoordinateMapper {
    #[inline]
    fn to_pixel(&self, x: f64, y: f64) -> Point {
        math_to_pixel(x, y, &self.bounds, &self.viewport)
    }

    #[inline]
    fn to_math(&self, cx: f64, cy: f64) -> Point {
        pixel_to_math(cx, cy, &self.bounds, &self.viewport)
    }
}
