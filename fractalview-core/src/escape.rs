use serde::{Deserialize, Serialize};

use crate::complex::Complex;

/// Magnitude of the Julia constant; the configured angle picks a point on
/// the circle of this radius.
pub const JULIA_CONSTANT_RADIUS: f64 = 0.7885;

/// Squared escape radius (`|z| > 2`).
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Which fractal a render produces.
///
/// Both kinds share [`iterate`]; they differ only in which of `z₀` and `c`
/// varies per pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKind {
    /// `z₀ = 0`, `c = pixel`.
    #[default]
    Mandelbrot,
    /// `z₀ = pixel`, `c` fixed for the whole image.
    Julia,
}

impl FractalKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

/// Derive the Julia constant for `angle` (radians).
pub fn julia_constant(angle: f64) -> Complex {
    Complex::from_polar(JULIA_CONSTANT_RADIUS, angle)
}

/// Count iterations of `z ↦ z² + c` starting at `z0`.
///
/// The loop keeps going while `|z|² <= 4` and the counter has not passed
/// `max_iterations`, so a point that never escapes returns
/// `max_iterations + 1`. Anything `>= max_iterations` is treated as inside
/// the set by the colouring pass.
#[inline]
pub fn iterate(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    debug_assert!(max_iterations <= crate::MAX_ITERATIONS_LIMIT);

    let (mut zr, mut zi) = (z0.re, z0.im);
    let mut n = 0;
    while zr * zr + zi * zi <= ESCAPE_RADIUS_SQ && n <= max_iterations {
        let next_re = zr * zr - zi * zi + c.re;
        zi = 2.0 * zr * zi + c.im;
        zr = next_re;
        n += 1;
    }
    n
}

/// Escape-time evaluator bound to one fractal kind and one Julia constant.
///
/// Built once per render; [`evaluate`](Self::evaluate) picks the `(z₀, c)`
/// assignment for a mapped pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTime {
    kind: FractalKind,
    julia_c: Complex,
    max_iterations: u32,
}

impl EscapeTime {
    pub fn new(kind: FractalKind, julia_angle: f64, max_iterations: u32) -> Self {
        let julia_c = match kind {
            FractalKind::Mandelbrot => Complex::ZERO,
            FractalKind::Julia => julia_constant(julia_angle),
        };
        Self {
            kind,
            julia_c,
            max_iterations,
        }
    }

    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    /// The fixed constant used for Julia renders (zero for Mandelbrot).
    pub fn julia_c(&self) -> Complex {
        self.julia_c
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    pub fn evaluate(&self, point: Complex) -> u32 {
        match self.kind {
            FractalKind::Mandelbrot => iterate(Complex::ZERO, point, self.max_iterations),
            FractalKind::Julia => iterate(point, self.julia_c, self.max_iterations),
        }
    }
}
