use serde::{Deserialize, Serialize};

/// A point on the complex plane, `re + im·i`.
///
/// Only the handful of operations the mapper and the Julia constant need
/// live here; the iteration loop threads two scalars instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Polar to rectangular: `(r·cos θ, r·sin θ)`.
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            re: radius * angle.cos(),
            im: radius * angle.sin(),
        }
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Complex conjugate, `re - im·i`.
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{} + {}i", self.re, self.im)
        } else {
            write!(f, "{} - {}i", self.re, -self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn zero_constant() {
        let z = Complex::ZERO;
        assert_eq!(z.re, 0.0);
        assert_eq!(z.im, 0.0);
    }

    #[test]
    fn polar_on_axes() {
        let east = Complex::from_polar(2.0, 0.0);
        assert!(approx_eq(east.re, 2.0));
        assert!(approx_eq(east.im, 0.0));

        let north = Complex::from_polar(2.0, FRAC_PI_2);
        assert!(approx_eq(north.re, 0.0));
        assert!(approx_eq(north.im, 2.0));

        let west = Complex::from_polar(1.0, PI);
        assert!(approx_eq(west.re, -1.0));
        assert!(approx_eq(west.im, 0.0));
    }

    #[test]
    fn norm_sq() {
        assert!(approx_eq(Complex::new(3.0, 4.0).norm_sq(), 25.0));
    }

    #[test]
    fn conjugate_flips_imaginary() {
        let z = Complex::new(1.5, -0.25).conj();
        assert_eq!(z, Complex::new(1.5, 0.25));
    }

    #[test]
    fn finiteness() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display_sign() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
    }
}
