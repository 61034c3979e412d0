// File: crates/mathlet-core/src/axes.rs
// Summary: Coordinate axes through the origin.

use crate::geometry::Point;
use crate::mapper::math_to_pixel;
use crate::style::StrokeStyle;
use crate::surface::Surface;
use crate::types::{Bounds, Viewport};

/// Pixel endpoints of the x-axis (y = 0, spanning x_min..x_max) and the
/// y-axis (x = 0, spanning y_min..y_max). When 0 is outside the bounds the
/// line lands outside the drawable area; it is not suppressed.
pub fn axis_segments(bounds: &Bounds, viewport: &Viewport) -> [(Point, Point); 2] {
    let origin = math_to_pixel(0.0, 0.0, bounds, viewport);
    let left = math_to_pixel(bounds.x_min, 0.0, bounds, viewport);
    let right = math_to_pixel(bounds.x_max, 0.0, bounds, viewport);
    let bottom = math_to_pixel(0.0, bounds.y_min, bounds, viewport);
    let top = math_to_pixel(0.0, bounds.y_max, bounds, viewport);
    [
        (Point::new(left.x, origin.y), Point::new(right.x, origin.y)),
        (Point::new(origin.x, bottom.y), Point::new(origin.x, top.y)),
    ]
}

pub fn draw_axes<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: &Bounds,
    viewport: &Viewport,
    style: &StrokeStyle,
) {
    style.apply(surface);
    for (from, to) in axis_segments(bounds, viewport) {
        surface.begin_path();
        surface.move_to(from.x, from.y);
        surface.line_to(to.x, to.y);
        surface.stroke();
    }
}
