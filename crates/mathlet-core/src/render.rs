// File: crates/mathlet-core/src/render.rs
// Summary: Figure composition (grid, axes, curves) and headless PNG/RGBA rendering on Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axes::draw_axes;
use crate::error::EvalFault;
use crate::grid::{draw_grid, DEFAULT_STEP};
use crate::plot::{plot_function, total, PlotOptions, DEFAULT_SAMPLES};
use crate::style::{StrokeStyle, Style};
use crate::surface::Surface;
use crate::skia_surface::SkiaSurface;
use crate::types::{Bounds, Viewport, HEIGHT, PADDING, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub padding: f64,
    pub style: Style,
    pub grid_step: f64,
    pub samples: usize,
    pub show_grid: bool,
    pub show_axes: bool,
}

impl RenderOptions {
    pub fn viewport(&self) -> Viewport {
        Viewport::from_size(self.width, self.height, self.padding)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            style: Style::default(),
            grid_step: DEFAULT_STEP,
            samples: DEFAULT_SAMPLES,
            show_grid: true,
            show_axes: true,
        }
    }
}

type PlotFn = Box<dyn Fn(f64) -> Result<f64, EvalFault>>;

/// A function to plot, with an optional stroke overriding the style's curve stroke.
pub struct Curve {
    f: PlotFn,
    pub stroke: Option<StrokeStyle>,
}

impl Curve {
    pub fn new(f: impl Fn(f64) -> Result<f64, EvalFault> + 'static) -> Self {
        Self { f: Box::new(f), stroke: None }
    }

    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn eval(&self, x: f64) -> Result<f64, EvalFault> {
        (self.f)(x)
    }
}

pub struct Figure {
    pub bounds: Bounds,
    pub curves: Vec<Curve>,
}

impl Figure {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, curves: Vec::new() }
    }

    pub fn add_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    /// Add a total function with the default curve stroke.
    pub fn plot(&mut self, g: impl Fn(f64) -> f64 + 'static) {
        self.add_curve(Curve::new(total(g)));
    }

    /// Draw grid, axes, then curves onto any surface.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, opts: &RenderOptions) {
        let viewport = opts.viewport();
        if !self.bounds.is_valid() || !viewport.is_valid() {
            log::warn!("degenerate figure: bounds {:?}, viewport {:?}", self.bounds, viewport);
        }

        if opts.show_grid {
            draw_grid(surface, &self.bounds, &viewport, opts.grid_step, &opts.style.grid);
        }
        if opts.show_axes {
            draw_axes(surface, &self.bounds, &viewport, &opts.style.axes);
        }
        for curve in &self.curves {
            let plot_opts = PlotOptions {
                samples: opts.samples,
                stroke: curve.stroke.clone().unwrap_or_else(|| opts.style.curve.clone()),
            };
            plot_function(surface, &*curve.f, &self.bounds, &viewport, &plot_opts);
        }
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.style.background);
        self.draw(&mut SkiaSurface::new(canvas), opts);
        Ok(surface)
    }

    /// Render into a tightly packed RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}
