use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;

/// Fraction of the radius added or removed by one zoom step.
pub const ZOOM_STEP: f64 = 0.1;

/// Largest radius reachable by zooming out.
pub const MAX_RADIUS: f64 = 4.0;

/// Square window onto the complex plane.
///
/// The image is `size × size` pixels and covers the plane square centred on
/// `center` with half-width `radius`. Pixel `(0, 0)` maps to the corner
/// `(center.re - radius, center.im - radius)`; the imaginary axis grows with
/// pixel-y, so the image is not flipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    /// Centre of the window in the complex plane.
    pub center: Complex,

    /// Half-width of the window in complex-plane units.
    pub radius: f64,

    /// Side length of the square image in pixels.
    pub size: u32,
}

impl ViewWindow {
    /// Create a window, rejecting degenerate geometry.
    pub fn new(center: Complex, radius: f64, size: u32) -> crate::Result<Self> {
        if size == 0 {
            return Err(CoreError::InvalidImageSize(size));
        }
        if radius <= 0.0 || !radius.is_finite() {
            return Err(CoreError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(CoreError::InvalidCenter {
                re: center.re,
                im: center.im,
            });
        }
        Ok(Self {
            center,
            radius,
            size,
        })
    }

    /// Map a pixel index to its point on the complex plane.
    ///
    /// `re = px·(2r)/size + (cx - r)`, evaluated in exactly that order so
    /// every caller sees the same pixel-to-plane scale.
    #[inline]
    pub fn pixel_to_complex(&self, px: u32, py: u32) -> Complex {
        self.point_to_complex(px as f64, py as f64)
    }

    /// Like [`pixel_to_complex`](Self::pixel_to_complex) but for fractional
    /// pixel positions (pointer coordinates).
    #[inline]
    pub fn point_to_complex(&self, x: f64, y: f64) -> Complex {
        let span = 2.0 * self.radius;
        let size = self.size as f64;
        Complex::new(
            x * span / size + (self.center.re - self.radius),
            y * span / size + (self.center.im - self.radius),
        )
    }

    /// Complex-plane distance between neighbouring pixels.
    pub fn pixel_spacing(&self) -> f64 {
        2.0 * self.radius / self.size as f64
    }

    /// The same window, re-centred on the point under pixel `(x, y)`.
    pub fn recentered_at(&self, x: f64, y: f64) -> Self {
        let center = self.point_to_complex(x, y);
        debug!(%center, "Recentred view");
        Self { center, ..*self }
    }

    /// Shrink the radius by one [`ZOOM_STEP`].
    pub fn zoom_in(&self) -> Self {
        let radius = self.radius - ZOOM_STEP * self.radius;
        debug!(radius, "Zoomed in");
        Self { radius, ..*self }
    }

    /// Grow the radius by one [`ZOOM_STEP`], never past [`MAX_RADIUS`].
    pub fn zoom_out(&self) -> Self {
        let radius = (self.radius + ZOOM_STEP * self.radius).min(MAX_RADIUS);
        debug!(radius, "Zoomed out");
        Self { radius, ..*self }
    }
}
