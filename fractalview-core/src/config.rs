use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::ColorScheme;
use crate::complex::Complex;
use crate::error::CoreError;
use crate::escape::{EscapeTime, FractalKind};
use crate::viewport::ViewWindow;

/// Image side lengths offered by the viewer.
pub const SIZE_PRESETS: [u32; 6] = [400, 640, 800, 1080, 1440, 1900];

/// Fraction of the iteration budget added or removed by one step.
pub const ITERATION_STEP: f64 = 0.1;

/// Direction for [`RenderConfig::step_iterations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Everything one render pass needs.
///
/// A render takes this by value, so later edits by the caller cannot leak
/// into a pass that is already running. Every field has a serde default, so
/// a preset file only needs the fields it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_center_x")]
    pub center_x: f64,
    #[serde(default)]
    pub center_y: f64,
    /// Half-width of the visible square.
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Side length in pixels; images are always square.
    #[serde(default = "default_image_size")]
    pub image_size: u32,
    #[serde(default)]
    pub kind: FractalKind,
    /// Radians; only read for Julia renders.
    #[serde(default = "default_julia_angle")]
    pub julia_angle: f64,
    #[serde(default)]
    pub colors: ColorScheme,
}

fn default_center_x() -> f64 {
    RenderConfig::MANDELBROT_CENTER.re
}

fn default_radius() -> f64 {
    RenderConfig::MANDELBROT_RADIUS
}

fn default_max_iterations() -> u32 {
    RenderConfig::DEFAULT_MAX_ITERATIONS
}

fn default_image_size() -> u32 {
    RenderConfig::DEFAULT_IMAGE_SIZE
}

fn default_julia_angle() -> f64 {
    RenderConfig::DEFAULT_JULIA_ANGLE
}

impl RenderConfig {
    pub const MANDELBROT_CENTER: Complex = Complex { re: -0.6, im: 0.0 };
    pub const MANDELBROT_RADIUS: f64 = 1.3;
    pub const JULIA_CENTER: Complex = Complex { re: 0.0, im: 0.0 };
    pub const JULIA_RADIUS: f64 = 1.7;
    pub const DEFAULT_MAX_ITERATIONS: u32 = 25;
    pub const DEFAULT_IMAGE_SIZE: u32 = 800;
    pub const DEFAULT_JULIA_ANGLE: f64 = PI;

    /// Default Mandelbrot view.
    pub fn mandelbrot() -> Self {
        Self {
            center_x: Self::MANDELBROT_CENTER.re,
            center_y: Self::MANDELBROT_CENTER.im,
            radius: Self::MANDELBROT_RADIUS,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            image_size: Self::DEFAULT_IMAGE_SIZE,
            kind: FractalKind::Mandelbrot,
            julia_angle: Self::DEFAULT_JULIA_ANGLE,
            colors: ColorScheme::default(),
        }
    }

    /// Default Julia view.
    pub fn julia() -> Self {
        Self::mandelbrot().switch_kind(FractalKind::Julia)
    }

    /// Reject configs that cannot be rendered.
    pub fn validate(&self) -> crate::Result<()> {
        if self.image_size == 0 {
            return Err(CoreError::InvalidImageSize(self.image_size));
        }
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(CoreError::InvalidRadius(self.radius));
        }
        if self.max_iterations < 1 || self.max_iterations > crate::MAX_ITERATIONS_LIMIT {
            return Err(CoreError::InvalidMaxIterations(self.max_iterations));
        }
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(CoreError::InvalidCenter {
                re: self.center_x,
                im: self.center_y,
            });
        }
        Ok(())
    }

    pub fn center(&self) -> Complex {
        Complex::new(self.center_x, self.center_y)
    }

    /// The validated view window for this config.
    pub fn view(&self) -> crate::Result<ViewWindow> {
        self.validate()?;
        ViewWindow::new(self.center(), self.radius, self.image_size)
    }

    /// The escape-time evaluator for this config's kind and Julia angle.
    pub fn escape_time(&self) -> EscapeTime {
        EscapeTime::new(self.kind, self.julia_angle, self.max_iterations)
    }

    /// Adopt a view window's center and radius.
    pub fn with_view(self, view: &ViewWindow) -> Self {
        Self {
            center_x: view.center.re,
            center_y: view.center.im,
            radius: view.radius,
            image_size: view.size,
            ..self
        }
    }

    /// Switch fractal kind, resetting center, radius, and iteration budget to
    /// that kind's defaults. Size, colors, and Julia angle are kept.
    pub fn switch_kind(self, kind: FractalKind) -> Self {
        let (center, radius) = match kind {
            FractalKind::Mandelbrot => (Self::MANDELBROT_CENTER, Self::MANDELBROT_RADIUS),
            FractalKind::Julia => (Self::JULIA_CENTER, Self::JULIA_RADIUS),
        };
        debug!(kind = kind.label(), "Switched fractal kind");
        Self {
            center_x: center.re,
            center_y: center.im,
            radius,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            kind,
            ..self
        }
    }

    /// Raise or lower the iteration budget by [`ITERATION_STEP`], truncating
    /// toward zero. Small budgets may not move; the result is never below 1.
    pub fn step_iterations(self, step: Step) -> Self {
        let n = self.max_iterations as f64;
        let next = match step {
            Step::Up => n + n * ITERATION_STEP,
            Step::Down => n - n * ITERATION_STEP,
        };
        let max_iterations = (next as u32).clamp(1, crate::MAX_ITERATIONS_LIMIT);
        Self {
            max_iterations,
            ..self
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::mandelbrot()
    }
}
