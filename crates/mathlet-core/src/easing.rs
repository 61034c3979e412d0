// File: crates/mathlet-core/src/easing.rs
// Summary: Easing (rate) curves on normalized time, CSS timing equivalents, and interpolation helpers.
// Notes:
// - Every curve maps t in [0, 1] to a progress value; most stay in [0, 1] but
//   the back/overshoot/wiggle families intentionally leave it.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::EasingError;
use crate::grid::linspace;

/// Overshoot amount used by the back family.
pub const BACK_OVERSHOOT: f64 = 1.70158;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Smooth,
    RushInto,
    RushFrom,
    SlowInto,
    DoubleSmooth,
    ThereAndBack,
    ThereAndBackWithPause { pause_ratio: f64 },
    RunningStart { pull_factor: f64 },
    Overshoot { pull_factor: f64 },
    Wiggle { wiggles: f64 },
    Lingering,
    ExponentialDecay { half_life: f64 },
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InExpo,
    OutExpo,
    InOutExpo,
    InBack { s: f64 },
    OutBack { s: f64 },
    InOutBack { s: f64 },
}

impl Easing {
    /// Named curves with their default parameters.
    pub const REGISTRY: &'static [(&'static str, Easing)] = &[
        ("linear", Easing::Linear),
        ("smooth", Easing::Smooth),
        ("rush_into", Easing::RushInto),
        ("rush_from", Easing::RushFrom),
        ("slow_into", Easing::SlowInto),
        ("double_smooth", Easing::DoubleSmooth),
        ("there_and_back", Easing::ThereAndBack),
        ("there_and_back_with_pause", Easing::ThereAndBackWithPause { pause_ratio: 1.0 / 3.0 }),
        ("running_start", Easing::RunningStart { pull_factor: -0.5 }),
        ("overshoot", Easing::Overshoot { pull_factor: 1.5 }),
        ("wiggle", Easing::Wiggle { wiggles: 2.0 }),
        ("lingering", Easing::Lingering),
        ("exponential_decay", Easing::ExponentialDecay { half_life: 0.1 }),
        ("ease_in_sine", Easing::InSine),
        ("ease_out_sine", Easing::OutSine),
        ("ease_in_out_sine", Easing::InOutSine),
        ("ease_in_quad", Easing::InQuad),
        ("ease_out_quad", Easing::OutQuad),
        ("ease_in_out_quad", Easing::InOutQuad),
        ("ease_in_cubic", Easing::InCubic),
        ("ease_out_cubic", Easing::OutCubic),
        ("ease_in_out_cubic", Easing::InOutCubic),
        ("ease_in_quart", Easing::InQuart),
        ("ease_out_quart", Easing::OutQuart),
        ("ease_in_out_quart", Easing::InOutQuart),
        ("ease_in_expo", Easing::InExpo),
        ("ease_out_expo", Easing::OutExpo),
        ("ease_in_out_expo", Easing::InOutExpo),
        ("ease_in_back", Easing::InBack { s: BACK_OVERSHOOT }),
        ("ease_out_back", Easing::OutBack { s: BACK_OVERSHOOT }),
        ("ease_in_out_back", Easing::InOutBack { s: BACK_OVERSHOOT }),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Smooth => "smooth",
            Easing::RushInto => "rush_into",
            Easing::RushFrom => "rush_from",
            Easing::SlowInto => "slow_into",
            Easing::DoubleSmooth => "double_smooth",
            Easing::ThereAndBack => "there_and_back",
            Easing::ThereAndBackWithPause { .. } => "there_and_back_with_pause",
            Easing::RunningStart { .. } => "running_start",
            Easing::Overshoot { .. } => "overshoot",
            Easing::Wiggle { .. } => "wiggle",
            Easing::Lingering => "lingering",
            Easing::ExponentialDecay { .. } => "exponential_decay",
            Easing::InSine => "ease_in_sine",
            Easing::OutSine => "ease_out_sine",
            Easing::InOutSine => "ease_in_out_sine",
            Easing::InQuad => "ease_in_quad",
            Easing::OutQuad => "ease_out_quad",
            Easing::InOutQuad => "ease_in_out_quad",
            Easing::InCubic => "ease_in_cubic",
            Easing::OutCubic => "ease_out_cubic",
            Easing::InOutCubic => "ease_in_out_cubic",
            Easing::InQuart => "ease_in_quart",
            Easing::OutQuart => "ease_out_quart",
            Easing::InOutQuart => "ease_in_out_quart",
            Easing::InExpo => "ease_in_expo",
            Easing::OutExpo => "ease_out_expo",
            Easing::InOutExpo => "ease_in_out_expo",
            Easing::InBack { .. } => "ease_in_back",
            Easing::OutBack { .. } => "ease_out_back",
            Easing::InOutBack { .. } => "ease_in_out_back",
        }
    }

    /// Look up a curve by name, falling back to `Linear`.
    pub fn by_name(name: &str) -> Easing {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown easing '{name}', using linear");
            Easing::Linear
        })
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::REGISTRY.iter().map(|(name, _)| *name)
    }

    pub fn apply(&self, t: f64) -> f64 {
        match *self {
            Easing::Linear => t,
            Easing::Smooth => smooth(t),
            Easing::RushInto => 2.0 * smooth(0.5 * t),
            Easing::RushFrom => 2.0 * smooth(0.5 * (t + 1.0)) - 1.0,
            Easing::SlowInto => (1.0 - (1.0 - t) * (1.0 - t)).sqrt(),
            Easing::DoubleSmooth => {
                if t < 0.5 { 0.5 * smooth(2.0 * t) } else { 0.5 * (1.0 + smooth(2.0 * t - 1.0)) }
            }
            Easing::ThereAndBack => there_and_back(t),
            Easing::ThereAndBackWithPause { pause_ratio } => {
                let a = 2.0 / (1.0 - pause_ratio);
                if t < 0.5 - pause_ratio / 2.0 {
                    smooth(a * t)
                } else if t < 0.5 + pause_ratio / 2.0 {
                    1.0
                } else {
                    smooth(a - a * t)
                }
            }
            Easing::RunningStart { pull_factor } => {
                bezier_at(&[0.0, 0.0, pull_factor, pull_factor, 1.0, 1.0, 1.0], t)
            }
            Easing::Overshoot { pull_factor } => {
                bezier_at(&[0.0, 0.0, pull_factor, pull_factor, 1.0, 1.0], t)
            }
            Easing::Wiggle { wiggles } => there_and_back(t) * (wiggles * PI * t).sin(),
            Easing::Lingering => squish(|u| u, 0.0, 0.8, t),
            Easing::ExponentialDecay { half_life } => 1.0 - (-t / half_life).exp(),
            Easing::InSine => 1.0 - (t * PI / 2.0).cos(),
            Easing::OutSine => (t * PI / 2.0).sin(),
            Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::InQuad => t * t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 { 2.0 * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(2) / 2.0 }
            }
            Easing::InCubic => t * t * t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutCubic => {
                if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
            }
            Easing::InQuart => t * t * t * t,
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::InOutQuart => {
                if t < 0.5 { 8.0 * t * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(4) / 2.0 }
            }
            Easing::InExpo => {
                if t == 0.0 { 0.0 } else { 2f64.powf(10.0 * t - 10.0) }
            }
            Easing::OutExpo => {
                if t == 1.0 { 1.0 } else { 1.0 - 2f64.powf(-10.0 * t) }
            }
            Easing::InOutExpo => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::InBack { s } => t * t * ((s + 1.0) * t - s),
            Easing::OutBack { s } => 1.0 + (t - 1.0).powi(2) * ((s + 1.0) * (t - 1.0) + s),
            Easing::InOutBack { s } => {
                let c = s * 1.525;
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((c + 1.0) * 2.0 * t - c) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((c + 1.0) * (2.0 * t - 2.0) + c) + 2.0) / 2.0
                }
            }
        }
    }

    /// CSS timing function for this curve's name (see [`css_timing_function`]).
    pub fn css(&self) -> &'static str {
        css_timing_function(&self.name().replace('_', "-"))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::REGISTRY
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, e)| *e)
            .ok_or_else(|| EasingError::UnknownEasing(s.to_string()))
    }
}

/// Zero first and second derivatives at both ends.
pub fn smooth(t: f64) -> f64 {
    let s = 1.0 - t;
    t.powi(3) * (10.0 * s * s + 5.0 * s * t + t * t)
}

/// Reaches 1 at t = 0.5 and returns to 0 at t = 1.
pub fn there_and_back(t: f64) -> f64 {
    let u = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
    smooth(u)
}

/// Run `f` only inside `[a, b]`, holding its end values outside.
pub fn squish<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, t: f64) -> f64 {
    if a == b {
        a
    } else if t < a {
        f(0.0)
    } else if t > b {
        f(1.0)
    } else {
        f((t - a) / (b - a))
    }
}

/// Scale a curve so it stops short of 1.
pub fn not_quite_there<F: Fn(f64) -> f64>(f: F, proportion: f64, t: f64) -> f64 {
    proportion * f(t)
}

fn binomial(n: usize, k: usize) -> f64 {
    if k > n { return 0.0; }
    let k = k.min(n - k);
    let mut out = 1.0;
    for i in 0..k {
        out = out * (n - i) as f64 / (i + 1) as f64;
    }
    out
}

fn bezier_at(points: &[f64], t: f64) -> f64 {
    let n = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .map(|(k, p)| (1.0 - t).powi((n - k) as i32) * t.powi(k as i32) * binomial(n, k) * p)
        .sum()
}

/// One-dimensional Bezier curve over control values.
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier {
    points: Vec<f64>,
}

impl Bezier {
    pub fn new(points: Vec<f64>) -> Result<Self, EasingError> {
        if points.is_empty() {
            return Err(EasingError::EmptyBezier);
        }
        Ok(Self { points })
    }

    pub fn eval(&self, t: f64) -> f64 {
        bezier_at(&self.points, t)
    }
}

const CSS_TIMING_FUNCTIONS: &[(&str, &str)] = &[
    ("linear", "linear"),
    ("ease", "ease"),
    ("ease-in", "cubic-bezier(0.42, 0, 1.0, 1.0)"),
    ("ease-out", "cubic-bezier(0, 0, 0.58, 1.0)"),
    ("ease-in-out", "cubic-bezier(0.42, 0, 0.58, 1.0)"),
    ("smooth", "cubic-bezier(0.37, 0, 0.63, 1)"),
    ("ease-in-sine", "cubic-bezier(0.12, 0, 0.39, 0)"),
    ("ease-out-sine", "cubic-bezier(0.61, 1, 0.88, 1)"),
    ("ease-in-out-sine", "cubic-bezier(0.37, 0, 0.63, 1)"),
    ("ease-in-quad", "cubic-bezier(0.11, 0, 0.5, 0)"),
    ("ease-out-quad", "cubic-bezier(0.5, 1, 0.89, 1)"),
    ("ease-in-out-quad", "cubic-bezier(0.45, 0, 0.55, 1)"),
    ("ease-in-cubic", "cubic-bezier(0.32, 0, 0.67, 0)"),
    ("ease-out-cubic", "cubic-bezier(0.33, 1, 0.68, 1)"),
    ("ease-in-out-cubic", "cubic-bezier(0.65, 0, 0.35, 1)"),
    ("ease-in-back", "cubic-bezier(0.36, 0, 0.66, -0.56)"),
    ("ease-out-back", "cubic-bezier(0.34, 1.56, 0.64, 1)"),
    ("ease-in-out-back", "cubic-bezier(0.68, -0.6, 0.32, 1.6)"),
];

/// CSS timing function string for a kebab-case name; `"linear"` when unknown.
pub fn css_timing_function(name: &str) -> &'static str {
    CSS_TIMING_FUNCTIONS
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| *v)
        .unwrap_or("linear")
}

/// `start + (end - start) * easing(t)`.
pub fn interpolate(start: f64, end: f64, t: f64, easing: Easing) -> f64 {
    start + (end - start) * easing.apply(t)
}

/// `(t, easing(t))` at `n` evenly spaced t in [0, 1].
pub fn sample(easing: Easing, n: usize) -> Vec<(f64, f64)> {
    linspace(0.0, 1.0, n).into_iter().map(|t| (t, easing.apply(t))).collect()
}
