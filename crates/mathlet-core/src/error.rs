// File: crates/mathlet-core/src/error.rs
// Summary: Library error types (function evaluation, themes, easing, preferences).

use thiserror::Error;

/// A plotted function could not produce a value at `x`.
/// The plotter turns this into a segment break for that one sample.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalFault {
    #[error("undefined at x = {0}")]
    Undefined(f64),
    #[error("division by zero at x = {0}")]
    DivisionByZero(f64),
    #[error("evaluation failed at x = {x}: {reason}")]
    Other { x: f64, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid hex color '{0}' (expected #RRGGBB)")]
    InvalidHex(String),
    #[error("unknown color scheme '{0}'")]
    UnknownScheme(String),
    #[error("unknown color key '{0}'")]
    UnknownColorKey(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EasingError {
    #[error("bezier needs at least one control point")]
    EmptyBezier,
    #[error("unknown easing function '{0}'")]
    UnknownEasing(String),
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid TOML: {0}")]
    Decode(#[from] toml::de::Error),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}
