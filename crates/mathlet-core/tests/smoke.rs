// File: crates/mathlet-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use mathlet_core::{Bounds, Curve, EvalFault, Figure, RenderOptions};

#[test]
fn render_smoke_png() {
    let mut figure = Figure::new(Bounds::symmetric(5.0, 5.0));
    figure.plot(|x| x * x - 3.0);
    figure.add_curve(Curve::new(|x| {
        if x == 0.0 { Err(EvalFault::DivisionByZero(x)) } else { Ok(1.0 / x) }
    }));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    figure.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = figure.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn degenerate_bounds_still_render() {
    // nothing sensible to draw, but the call must not fail
    let mut figure = Figure::new(Bounds::new(1.0, 1.0, 0.0, 0.0));
    figure.plot(|x| x);
    let bytes = figure.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
