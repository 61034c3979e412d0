// File: crates/mathlet-core/tests/easing.rs
// Purpose: Easing registry, name lookup, CSS mapping and interpolation helpers.

use mathlet_core::easing::{css_timing_function, interpolate, not_quite_there, sample, squish, Bezier};
use mathlet_core::{EasingError, Easing};

#[test]
fn registry_names_round_trip() {
    for (name, easing) in Easing::REGISTRY {
        assert_eq!(easing.name(), *name);
        assert_eq!(name.parse::<Easing>(), Ok(*easing));
        assert_eq!(easing.to_string(), *name);
    }
    assert_eq!(Easing::names().count(), Easing::REGISTRY.len());
}

#[test]
fn unknown_name_falls_back_to_linear() {
    assert_eq!(Easing::by_name("zigzag"), Easing::Linear);
    assert_eq!(
        "zigzag".parse::<Easing>(),
        Err(EasingError::UnknownEasing("zigzag".to_string()))
    );
}

#[test]
fn smooth_is_symmetric() {
    let e = Easing::Smooth;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    for t in [0.1, 0.2, 0.3, 0.4] {
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn back_family_overshoots() {
    let out_back = Easing::by_name("ease_out_back");
    let peak = sample(out_back, 101).into_iter().map(|(_, v)| v).fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    let in_back = Easing::by_name("ease_in_back");
    assert!(in_back.apply(0.2) < 0.0);
}

#[test]
fn css_mapping() {
    assert_eq!(Easing::InOutQuad.css(), "cubic-bezier(0.45, 0, 0.55, 1)");
    assert_eq!(Easing::Linear.css(), "linear");
    assert_eq!(Easing::Wiggle { wiggles: 2.0 }.css(), "linear");
    assert_eq!(css_timing_function("ease-in-out"), "cubic-bezier(0.42, 0, 0.58, 1.0)");
    assert_eq!(css_timing_function("nope"), "linear");
}

#[test]
fn interpolate_and_sample() {
    assert_eq!(interpolate(10.0, 20.0, 0.5, Easing::Linear), 15.0);
    assert_eq!(interpolate(10.0, 20.0, 1.0, Easing::InCubic), 20.0);
    let pts = sample(Easing::InQuad, 3);
    assert_eq!(pts, vec![(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]);
}

#[test]
fn bezier_curve() {
    assert_eq!(Bezier::new(Vec::new()), Err(EasingError::EmptyBezier));
    let b = Bezier::new(vec![0.0, 0.0, 1.0, 1.0]).unwrap();
    assert_eq!(b.eval(0.0), 0.0);
    assert_eq!(b.eval(1.0), 1.0);
    assert!((b.eval(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn long_bezier_stays_finite() {
    let flat = Bezier::new(vec![0.5; 70]).unwrap();
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert!((flat.eval(t) - 0.5).abs() < 1e-9, "eval({t}) = {}", flat.eval(t));
    }
}

#[test]
fn squish_and_not_quite_there() {
    let id = |u: f64| u;
    assert_eq!(squish(id, 0.25, 0.75, 0.1), 0.0);
    assert_eq!(squish(id, 0.25, 0.75, 0.5), 0.5);
    assert_eq!(squish(id, 0.25, 0.75, 0.9), 1.0);
    assert_eq!(not_quite_there(id, 0.7, 1.0), 0.7);
    // lingering finishes early and holds
    assert_eq!(Easing::Lingering.apply(0.9), 1.0);
}
