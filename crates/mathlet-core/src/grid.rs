// File: crates/mathlet-core/src/grid.rs
// Summary: Grid line layout helpers and vertical gridline rendering.

use crate::mapper::math_to_pixel;
use crate::style::StrokeStyle;
use crate::surface::Surface;
use crate::types::{Bounds, Viewport};

/// Default spacing between gridlines, in math units.
pub const DEFAULT_STEP: f64 = 1.0;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Multiples of `step` inside `[ceil(x_min), floor(x_max)]`, ascending.
/// Empty when `step` is not a positive finite number.
pub fn grid_positions(x_min: f64, x_max: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || !x_min.is_finite() || !x_max.is_finite() {
        return Vec::new();
    }
    let lo = x_min.ceil();
    let hi = x_max.floor();
    if lo > hi { return Vec::new(); }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// One vertical line per grid position, spanning the full visible height.
/// The dash pattern is reset to solid afterwards.
pub fn draw_grid<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: &Bounds,
    viewport: &Viewport,
    step: f64,
    style: &StrokeStyle,
) {
    if !(step.is_finite() && step > 0.0) {
        log::warn!("grid step must be positive and finite, got {step}; skipping grid");
        return;
    }
    style.apply(surface);

    for x in grid_positions(bounds.x_min, bounds.x_max, step) {
        let top = math_to_pixel(x, bounds.y_max, bounds, viewport);
        let bottom = math_to_pixel(x, bounds.y_min, bounds, viewport);
        surface.begin_path();
        surface.move_to(top.x, top.y);
        surface.line_to(bottom.x, bottom.y);
        surface.stroke();
    }

    surface.set_line_dash(&[]);
}
