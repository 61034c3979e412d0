// File: crates/demo/src/main.rs
// Summary: Demo renders a gallery of function plots (poles, clipping, faults, easing curves) to PNGs.

use anyhow::{Context, Result};
use mathlet_core::{Bounds, Curve, Easing, EvalFault, Figure, RenderOptions, SchemeSelector, StrokeStyle};
use std::path::PathBuf;

const PREFS_FILE: &str = "target/out/mathlet_prefs.toml";

fn main() -> Result<()> {
    env_logger::init();

    // Optional scheme name from CLI; otherwise whatever was saved last time
    let mut selector = SchemeSelector::with_store(PREFS_FILE);
    if let Some(name) = std::env::args().nth(1) {
        if name == "--list" {
            for scheme in selector.available() {
                println!("{scheme}");
            }
            return Ok(());
        }
        selector.set_scheme(&name, true);
    }
    println!("Using color scheme: {}", selector.current().name);

    let mut opts = RenderOptions::default();
    opts.style = selector.style();

    // 1) Reciprocal: the pole at x = 0 splits the curve in two
    let mut reciprocal = Figure::new(Bounds::symmetric(5.0, 5.0));
    reciprocal.add_curve(Curve::new(|x| {
        if x == 0.0 { Err(EvalFault::DivisionByZero(x)) } else { Ok(1.0 / x) }
    }));
    write(&reciprocal, &opts, "reciprocal")?;

    // 2) Parabola clipped to a narrow y-range
    let mut parabola = Figure::new(Bounds::new(-2.0, 2.0, 0.0, 1.0));
    parabola.plot(|x| x * x);
    let mut clip_opts = RenderOptions { grid_step: 0.5, ..RenderOptions::default() };
    clip_opts.style = opts.style.clone();
    write(&parabola, &clip_opts, "parabola_clip")?;

    // 3) Square root and its NaN half, next to the tangent's asymptotes
    let mut sqrt_tan = Figure::new(Bounds::new(-6.0, 6.0, -4.0, 4.0));
    sqrt_tan.plot(f64::sqrt);
    sqrt_tan.add_curve(
        Curve::new(|x| Ok(x.tan()))
            .with_stroke(StrokeStyle::solid(selector.current().highlight, 2.0)),
    );
    write(&sqrt_tan, &opts, "sqrt_tan")?;

    // 4) A function that fails on every integer; only those samples drop out
    let mut faulty = Figure::new(Bounds::symmetric(5.0, 3.0));
    faulty.add_curve(Curve::new(|x| {
        if x.fract() == 0.0 {
            Err(EvalFault::Other { x, reason: "integer input".to_string() })
        } else {
            Ok(2.0 * (x * 1.3).sin())
        }
    }));
    let faulty_opts = RenderOptions { samples: 40, style: opts.style.clone(), ..RenderOptions::default() };
    write(&faulty, &faulty_opts, "faulty")?;

    // 5) Easing curves on normalized time
    let mut easing = Figure::new(Bounds::new(-0.1, 1.1, -0.4, 1.4));
    let scheme = *selector.current();
    let palette = [scheme.accent, scheme.time, scheme.displacement, scheme.dot, scheme.contrast_1];
    for (name, color) in ["smooth", "rush_into", "there_and_back", "ease_out_back", "wiggle"].iter().zip(palette) {
        let e = Easing::by_name(name);
        easing.add_curve(
            Curve::new(move |t| {
                if (0.0..=1.0).contains(&t) { Ok(e.apply(t)) } else { Err(EvalFault::Undefined(t)) }
            })
            .with_stroke(StrokeStyle::solid(color, 2.0)),
        );
    }
    let easing_opts = RenderOptions { grid_step: 1.0, style: opts.style.clone(), ..RenderOptions::default() };
    write(&easing, &easing_opts, "easing")?;

    Ok(())
}

/// Render to target/out/mathlet_<name>.png.
fn write(figure: &Figure, opts: &RenderOptions, name: &str) -> Result<()> {
    let out = PathBuf::from("target/out").join(format!("mathlet_{name}.png"));
    figure
        .render_to_png(opts, &out)
        .with_context(|| format!("rendering {}", out.display()))?;
    log::info!("wrote {} ({} curves)", out.display(), figure.curves.len());
    println!("Wrote {}", out.display());
    Ok(())
}
