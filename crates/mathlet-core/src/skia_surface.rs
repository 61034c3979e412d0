// File: crates/mathlet-core/src/skia_surface.rs
// Summary: `Surface` implementation over a Skia canvas (CPU raster or GPU).

use skia_safe as skia;

use crate::surface::Surface;

/// Accumulates a path between `begin_path` and `stroke`, then draws it with an
/// anti-aliased stroke paint.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    path: skia::Path,
    paint: skia::Paint,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        paint.set_color(skia::Color::BLACK);
        Self { canvas, path: skia::Path::new(), paint }
    }

    pub fn canvas(&self) -> &skia::Canvas {
        self.canvas
    }
}

impl Surface for SkiaSurface<'_> {
    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn set_stroke_color(&mut self, color: skia::Color) {
        self.paint.set_color(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.paint.set_stroke_width(width as f32);
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        if pattern.is_empty() || pattern.iter().all(|v| *v <= 0.0) {
            self.paint.set_path_effect(None::<skia::PathEffect>);
            return;
        }
        // Skia wants an even interval count; an odd list is repeated, as the HTML canvas does.
        let mut intervals: Vec<f32> = pattern.iter().map(|v| *v as f32).collect();
        if intervals.len() % 2 == 1 {
            intervals.extend_from_within(..);
        }
        self.paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }

    fn stroke(&mut self) {
        self.canvas.draw_path(&self.path, &self.paint);
    }
}
