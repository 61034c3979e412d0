// File: crates/mathlet-core/src/lib.rs
// Summary: Core library entry point; exports coordinate mapping, plotting, theming and rendering APIs.

pub mod types;
pub mod geometry;
pub mod error;
pub mod mapper;
pub mod surface;
pub mod skia_surface;
pub mod style;
pub mod theme;
pub mod axes;
pub mod grid;
pub mod plot;
pub mod render;
pub mod easing;
pub mod quiz;
pub mod prefs;

pub use types::{Bounds, Viewport};
pub use geometry::Point;
pub use error::{EasingError, EvalFault, PrefsError, ThemeError};
pub use mapper::{math_to_pixel, pixel_to_math, CoordinateMapper, CoordinateTransform};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use skia_surface::SkiaSurface;
pub use style::{StrokeStyle, Style};
pub use theme::{ColorKey, ColorScheme};
pub use axes::draw_axes;
pub use grid::draw_grid;
pub use plot::{plot_function, trace_function, PlotOptions, PlotPath, Sample};
pub use render::{Curve, Figure, RenderOptions};
pub use easing::Easing;
pub use prefs::SchemeSelector;
