// File: crates/mathlet-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use mathlet_core::theme::{self, to_hex};
use mathlet_core::{Bounds, Figure, RenderOptions, Style};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut figure = Figure::new(Bounds::symmetric(5.0, 5.0));
    figure.plot(|x| x);

    let opts = RenderOptions::default();
    let (px, w, h, stride) = figure.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (600, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is inside the padding: background only
    let bg = opts.style.background;
    assert_eq!(pixel(&px, stride, 2, 2), [bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn curve_pixels_use_curve_color() {
    // Horizontal line y = 2 across the middle of the plot area, no grid/axes
    let mut figure = Figure::new(Bounds::symmetric(5.0, 5.0));
    figure.plot(|_| 2.0);
    let mut opts = RenderOptions::default();
    opts.show_grid = false;
    opts.show_axes = false;
    opts.style = Style::from_scheme(&theme::find("dark"));

    let (px, _, _, stride) = figure.render_to_rgba8(&opts).expect("rgba render");
    // y = 2 maps to pixel row 40 + 3/10 * 320 = 136
    let [r, g, b, a] = pixel(&px, stride, 300, 136);
    assert_eq!(a, 255);
    assert_eq!(to_hex(skia_safe::Color::from_rgb(r, g, b)), to_hex(opts.style.curve.color));
}
