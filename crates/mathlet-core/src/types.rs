// File: crates/mathlet-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, padding, math bounds, viewport).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 600;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 400;
/// Default uniform padding, in pixels.
pub const PADDING: f64 = 40.0;

/// Visible mathematical rectangle.
/// Contract: `x_min < x_max` and `y_min < y_max`. Not checked by the mapper;
/// degenerate bounds yield inf/NaN pixel positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Symmetric bounds `[-x, x] x [-y, y]`.
    pub const fn symmetric(x: f64, y: f64) -> Self {
        Self::new(-x, x, -y, y)
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    /// True when all edges are finite and both spans are strictly positive.
    pub fn is_valid(&self) -> bool {
        let finite = self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite();
        finite && self.x_min < self.x_max && self.y_min < self.y_max
    }

    /// Inclusive on every edge.
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y_min && y <= self.y_max
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && self.contains_y(y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::symmetric(5.0, 5.0)
    }
}

/// Pixel canvas with uniform padding on all four sides.
/// The drawable rectangle is `[padding, width - padding] x [padding, height - padding]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// Build from integer surface dimensions.
    pub fn from_size(width: i32, height: i32, padding: f64) -> Self {
        Self::new(width as f64, height as f64, padding)
    }

    /// Width of the drawable area.
    pub fn plot_width(&self) -> f64 { self.width - 2.0 * self.padding }
    /// Height of the drawable area.
    pub fn plot_height(&self) -> f64 { self.height - 2.0 * self.padding }

    pub fn left(&self) -> f64 { self.padding }
    pub fn right(&self) -> f64 { self.width - self.padding }
    pub fn top(&self) -> f64 { self.padding }
    pub fn bottom(&self) -> f64 { self.height - self.padding }

    /// Contract from callers: width and height exceed twice the padding.
    pub fn is_valid(&self) -> bool {
        self.padding >= 0.0 && self.plot_width() > 0.0 && self.plot_height() > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_size(WIDTH, HEIGHT, PADDING)
    }
}
