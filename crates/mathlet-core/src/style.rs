// File: crates/mathlet-core/src/style.rs
// Summary: Explicit render configuration (stroke styles per layer, derived from a color scheme).

use skia_safe as skia;

use crate::surface::Surface;
use crate::theme::ColorScheme;

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: skia::Color,
    pub width: f64,
    /// Dash intervals in pixels; empty means solid.
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(color: skia::Color, width: f64) -> Self {
        Self { color, width, dash: Vec::new() }
    }

    pub fn dashed(color: skia::Color, width: f64, dash: Vec<f64>) -> Self {
        Self { color, width, dash }
    }

    /// Set color, width and dash pattern on `surface`.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_stroke_color(self.color);
        surface.set_line_width(self.width);
        surface.set_line_dash(&self.dash);
    }
}

/// Colors and strokes for one figure. Passed to every draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub scheme: ColorScheme,
    pub background: skia::Color,
    pub axes: StrokeStyle,
    pub grid: StrokeStyle,
    pub curve: StrokeStyle,
}

impl Style {
    /// Derive layer strokes from a scheme: axes in text color, a faint grid,
    /// curves in the accent color.
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            scheme: *scheme,
            background: scheme.background,
            axes: StrokeStyle::solid(scheme.text, 2.0),
            grid: StrokeStyle::dashed(scheme.text.with_a(64), 1.0, vec![2.0, 2.0]),
            curve: StrokeStyle::solid(scheme.accent, 3.0),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        let scheme = ColorScheme::classic();
        Self {
            scheme,
            background: scheme.background,
            axes: StrokeStyle::solid(skia::Color::from_rgb(0x4a, 0x55, 0x68), 2.0),
            grid: StrokeStyle::dashed(skia::Color::from_rgb(0x2d, 0x37, 0x48), 1.0, vec![2.0, 2.0]),
            curve: StrokeStyle::solid(skia::Color::from_rgb(0x4e, 0xcc, 0xa3), 3.0),
        }
    }
}
