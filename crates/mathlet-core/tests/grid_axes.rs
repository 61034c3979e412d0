// File: crates/mathlet-core/tests/grid_axes.rs
// Purpose: Gridline placement, dash handling and axis endpoints, checked through the recording surface.

use mathlet_core::axes::axis_segments;
use mathlet_core::grid::{grid_positions, linspace};
use mathlet_core::{draw_axes, draw_grid, math_to_pixel, Bounds, DrawCommand, RecordingSurface, Style, Viewport};

#[test]
fn grid_lines_at_integer_multiples() {
    let bounds = Bounds::new(-2.5, 2.5, -1.0, 1.0);
    let viewport = Viewport::default();
    let style = Style::default();
    let mut surface = RecordingSurface::new();
    draw_grid(&mut surface, &bounds, &viewport, 1.0, &style.grid);

    assert_eq!(surface.stroke_count(), 5);
    let lines = surface.stroked_polylines();
    assert_eq!(lines.len(), 5);
    for (line, x) in lines.iter().zip([-2.0, -1.0, 0.0, 1.0, 2.0]) {
        let top = math_to_pixel(x, bounds.y_max, &bounds, &viewport);
        let bottom = math_to_pixel(x, bounds.y_min, &bounds, &viewport);
        assert_eq!(line.as_slice(), &[top, bottom]);
    }
}

#[test]
fn grid_sets_dash_then_restores_solid() {
    let bounds = Bounds::default();
    let style = Style::default();
    let mut surface = RecordingSurface::new();
    draw_grid(&mut surface, &bounds, &Viewport::default(), 1.0, &style.grid);

    let dashes: Vec<&Vec<f64>> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::LineDash(d) => Some(d),
            _ => None,
        })
        .collect();
    assert_eq!(dashes.first().map(|d| d.as_slice()), Some(&[2.0, 2.0][..]));
    assert_eq!(surface.commands().last(), Some(&DrawCommand::LineDash(Vec::new())));
}

#[test]
fn invalid_step_draws_nothing() {
    let bounds = Bounds::default();
    let style = Style::default();
    for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut surface = RecordingSurface::new();
        draw_grid(&mut surface, &bounds, &Viewport::default(), step, &style.grid);
        assert!(surface.commands().is_empty(), "step {step} produced commands");
    }
}

#[test]
fn grid_positions_respect_step() {
    assert_eq!(grid_positions(-2.5, 2.5, 1.0), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    assert_eq!(grid_positions(-5.0, 5.0, 2.0), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    assert_eq!(grid_positions(0.2, 0.8, 1.0), Vec::<f64>::new());
    assert!(grid_positions(-1.0, 1.0, 0.0).is_empty());
}

#[test]
fn axes_pass_through_origin() {
    let bounds = Bounds::new(-1.0, 3.0, -2.0, 2.0);
    let viewport = Viewport::new(400.0, 400.0, 0.0);
    let [x_axis, y_axis] = axis_segments(&bounds, &viewport);

    // y = 0 sits halfway down; x = 0 a quarter of the way across.
    assert_eq!(x_axis.0.y, 200.0);
    assert_eq!(x_axis.1.y, 200.0);
    assert_eq!(x_axis.0.x, 0.0);
    assert_eq!(x_axis.1.x, 400.0);
    assert_eq!(y_axis.0.x, 100.0);
    assert_eq!(y_axis.1.x, 100.0);
    assert_eq!(y_axis.0.y, 400.0);
    assert_eq!(y_axis.1.y, 0.0);
}

#[test]
fn draw_axes_strokes_two_lines_in_axis_style() {
    let bounds = Bounds::default();
    let viewport = Viewport::default();
    let style = Style::default();
    let mut surface = RecordingSurface::new();
    draw_axes(&mut surface, &bounds, &viewport, &style.axes);

    assert_eq!(surface.stroke_count(), 2);
    assert_eq!(surface.last_stroke_color(), Some(style.axes.color));
    assert!(surface.commands().contains(&DrawCommand::LineWidth(2.0)));
    let lines = surface.stroked_polylines();
    let expected = axis_segments(&bounds, &viewport);
    assert_eq!(lines[0], vec![expected[0].0, expected[0].1]);
    assert_eq!(lines[1], vec![expected[1].0, expected[1].1]);
}

#[test]
fn axes_outside_bounds_are_not_suppressed() {
    let bounds = Bounds::new(1.0, 5.0, 1.0, 5.0);
    let viewport = Viewport::default();
    let mut surface = RecordingSurface::new();
    draw_axes(&mut surface, &bounds, &viewport, &Style::default().axes);
    assert_eq!(surface.stroke_count(), 2);
    let [x_axis, _] = axis_segments(&bounds, &viewport);
    assert!(x_axis.0.y > viewport.bottom());
}

#[test]
fn linspace_endpoints() {
    let v = linspace(0.0, 1.0, 5);
    assert_eq!(v.len(), 5);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[4], 1.0);
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0, 3.0]);
}
