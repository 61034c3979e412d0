// File: crates/mathlet-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and pointer positions.

/// A coordinate pair. Used for both math space and pixel space; the
/// function producing it says which.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x as f32, p.y as f32)
    }
}

/// Pointer position inside a canvas, given the pointer's client position, the
/// canvas bounding rect origin, its border widths and the page scroll offset.
/// Feed the result to [`crate::mapper::pixel_to_math`] to get math coordinates.
pub fn client_to_canvas(client: Point, rect_origin: Point, border: Point, scroll: Point) -> Point {
    Point {
        x: client.x - rect_origin.x - border.x + scroll.x,
        y: client.y - rect_origin.y - border.y + scroll.y,
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
