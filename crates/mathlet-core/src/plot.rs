// File: crates/mathlet-core/src/plot.rs
// Summary: Function plotter; samples f over the visible x-range and strokes the valid runs.
// Notes:
// - Each sample is classified into a tagged `Sample` before the segment state
//   machine sees it, so faults, NaN/inf and off-screen values share one path.
// - A fault at one x only breaks the line there; the rest of the curve is drawn.
//   A panic inside `f` counts as a fault too.

use std::panic::{self, AssertUnwindSafe};

use crate::error::EvalFault;
use crate::geometry::Point;
use crate::mapper::math_to_pixel;
use crate::style::StrokeStyle;
use crate::surface::Surface;
use crate::types::{Bounds, Viewport};

/// Default number of sampling intervals (`samples + 1` evaluations).
pub const DEFAULT_SAMPLES: usize = 200;
/// Default step for [`derivative`].
pub const DEFAULT_DERIVATIVE_STEP: f64 = 1e-4;

/// Outcome of evaluating the plotted function at one x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Valid(f64),
    NonFinite,
    OutOfRange,
    Fault,
}

impl Sample {
    pub fn is_valid(&self) -> bool {
        matches!(self, Sample::Valid(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SegmentState {
    Open,
    Closed,
}

/// Pixel-space polylines produced by one trace. Segments are disjoint and in
/// ascending x order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotPath {
    pub segments: Vec<Vec<Point>>,
}

impl PlotPath {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter().flatten()
    }

    /// Issue move/line commands for every segment; does not stroke.
    pub fn emit<S: Surface + ?Sized>(&self, surface: &mut S) {
        for seg in &self.segments {
            let mut pts = seg.iter();
            if let Some(first) = pts.next() {
                surface.move_to(first.x, first.y);
            }
            for p in pts {
                surface.line_to(p.x, p.y);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub samples: usize,
    pub stroke: StrokeStyle,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { samples: DEFAULT_SAMPLES, stroke: crate::style::Style::default().curve }
    }
}

/// Adapt a total function so it can be handed to the plotter.
pub fn total<G>(g: G) -> impl Fn(f64) -> Result<f64, EvalFault>
where
    G: Fn(f64) -> f64,
{
    move |x| Ok(g(x))
}

/// Evenly spaced x-values `x_min + i * (x_max - x_min) / samples` for `i in 0..=samples`.
pub fn sample_xs(bounds: &Bounds, samples: usize) -> impl Iterator<Item = f64> {
    let n = samples.max(1);
    let x_min = bounds.x_min;
    let dx = bounds.x_span() / n as f64;
    (0..=n).map(move |i| x_min + i as f64 * dx)
}

/// Evaluate `f` at `x` and classify the result against the visible y-range
/// (edges inclusive). A panic while evaluating is reported as `Sample::Fault`.
pub fn classify<F>(f: &F, x: f64, bounds: &Bounds) -> Sample
where
    F: Fn(f64) -> Result<f64, EvalFault> + ?Sized,
{
    let Ok(result) = panic::catch_unwind(AssertUnwindSafe(|| f(x))) else {
        log::debug!("plotted function panicked at x = {x}");
        return Sample::Fault;
    };
    match result {
        Err(_) => Sample::Fault,
        Ok(y) if !y.is_finite() => Sample::NonFinite,
        Ok(y) if !bounds.contains_y(y) => Sample::OutOfRange,
        Ok(y) => Sample::Valid(y),
    }
}

/// Sample `f` and split the mapped points into segments at every invalid sample.
pub fn trace_function<F>(f: &F, bounds: &Bounds, viewport: &Viewport, samples: usize) -> PlotPath
where
    F: Fn(f64) -> Result<f64, EvalFault> + ?Sized,
{
    let mut path = PlotPath::default();
    let mut state = SegmentState::Closed;
    let (mut faults, mut non_finite, mut out_of_range) = (0usize, 0usize, 0usize);

    for x in sample_xs(bounds, samples) {
        match classify(f, x, bounds) {
            Sample::Valid(y) => {
                let p = math_to_pixel(x, y, bounds, viewport);
                match state {
                    SegmentState::Closed => {
                        path.segments.push(vec![p]);
                        state = SegmentState::Open;
                    }
                    SegmentState::Open => {
                        if let Some(seg) = path.segments.last_mut() {
                            seg.push(p);
                        }
                    }
                }
            }
            other => {
                match other {
                    Sample::Fault => faults += 1,
                    Sample::NonFinite => non_finite += 1,
                    _ => out_of_range += 1,
                }
                state = SegmentState::Closed;
            }
        }
    }

    log::debug!(
        "traced {} samples: {} segments, {} faults, {} non-finite, {} out of range",
        samples.max(1) + 1,
        path.segment_count(),
        faults,
        non_finite,
        out_of_range
    );
    path
}

/// Stroke `f` over the visible range as one path holding disjoint sub-paths.
/// Errors and panics from `f` only drop the sample they happen at.
pub fn plot_function<S, F>(surface: &mut S, f: &F, bounds: &Bounds, viewport: &Viewport, opts: &PlotOptions)
where
    S: Surface + ?Sized,
    F: Fn(f64) -> Result<f64, EvalFault> + ?Sized,
{
    let path = trace_function(f, bounds, viewport, opts.samples);
    opts.stroke.apply(surface);
    surface.begin_path();
    path.emit(surface);
    surface.stroke();
}

/// Central-difference approximation of f'(x).
pub fn derivative<G>(f: G, x: f64, h: f64) -> f64
where
    G: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}
