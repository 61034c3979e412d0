// File: crates/mathlet-core/src/surface.rs
// Summary: Drawing surface abstraction plus a command-recording implementation.
// Notes:
// - The renderers only ever issue these primitive calls; they never touch a
//   device or window directly.
// - `RecordingSurface` keeps the full command stream so callers (and tests) can
//   inspect exactly what a draw call produced.

use skia_safe as skia;

use crate::geometry::Point;

/// Path-based stroke surface, shaped after the HTML canvas 2D context.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn set_stroke_color(&mut self, color: skia::Color);
    fn set_line_width(&mut self, width: f64);
    /// Empty pattern means a solid line.
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn stroke(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    StrokeColor(skia::Color),
    LineWidth(f64),
    LineDash(Vec<f64>),
    Stroke,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of `stroke` calls issued.
    pub fn stroke_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Stroke)).count()
    }

    /// Every point emitted through `move_to`/`line_to`, in order.
    pub fn points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Polylines that ended up stroked. Each `move_to` opens a new polyline;
    /// `begin_path` discards sub-paths that were never stroked.
    pub fn stroked_polylines(&self) -> Vec<Vec<Point>> {
        let mut out = Vec::new();
        let mut pending: Vec<Vec<Point>> = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginPath => pending.clear(),
                DrawCommand::MoveTo(p) => pending.push(vec![*p]),
                DrawCommand::LineTo(p) => match pending.last_mut() {
                    Some(poly) => poly.push(*p),
                    // canvas semantics: line_to without a current point acts as move_to
                    None => pending.push(vec![*p]),
                },
                DrawCommand::Stroke => out.extend(pending.iter().cloned()),
                _ => {}
            }
        }
        out
    }

    /// Most recent stroke color set, if any.
    pub fn last_stroke_color(&self) -> Option<skia::Color> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::StrokeColor(color) => Some(*color),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(Point::new(x, y)));
    }

    fn set_stroke_color(&mut self, color: skia::Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.commands.push(DrawCommand::LineDash(pattern.to_vec()));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
