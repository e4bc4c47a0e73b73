use fractalview_core::{ColorScheme, HsbColor};
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::iteration_buffer::IterationBuffer;

/// Budgets up to this size get a precomputed count → RGBA table.
const LUT_MAX_ITERATIONS: u32 = 1 << 16;

/// Map an iteration count to a color.
///
/// Counts `>= max_iterations` mean "inside the set" and always come out
/// black (brightness 0) in both modes.
///
/// - Gradient: hue runs linearly from `color1` (count 0) to `color2`
///   (count `max_iterations`); saturation and brightness are the means of the
///   two colors.
/// - Psychedelic: hue is `color1.hue · max / n`, left unwrapped; saturation
///   is `color1`'s and brightness is full. A count of 0 (a starting point
///   already outside the escape radius) gets hue 0.
pub fn pick_color(n: u32, max_iterations: u32, scheme: &ColorScheme) -> HsbColor {
    let c1 = scheme.color1;
    let c2 = scheme.color2;
    let n_f = n as f64;
    let max = max_iterations as f64;
    let inside = n >= max_iterations;

    if scheme.psychedelic {
        let hue = if n == 0 { 0.0 } else { c1.hue * (max / n_f) };
        let brightness = if inside { 0.0 } else { 1.0 };
        HsbColor::new(hue, c1.saturation, brightness)
    } else {
        let hue = c2.hue * (n_f / max) + c1.hue * (max - n_f) / max;
        let saturation = (c1.saturation + c2.saturation) / 2.0;
        let brightness = if inside {
            0.0
        } else {
            (c1.brightness + c2.brightness) / 2.0
        };
        HsbColor::new(hue, saturation, brightness)
    }
}

/// Colors iteration counts for one scheme and iteration budget.
///
/// Counts never exceed `max_iterations + 1`, so small budgets are served
/// from a lookup table built once per mapper.
#[derive(Debug, Clone)]
pub struct ColorMapper {
    scheme: ColorScheme,
    max_iterations: u32,
    lut: Vec<[u8; 4]>,
}

impl ColorMapper {
    pub fn new(scheme: ColorScheme, max_iterations: u32) -> Self {
        let lut = if max_iterations <= LUT_MAX_ITERATIONS {
            (0..=max_iterations + 1)
                .map(|n| pick_color(n, max_iterations, &scheme).to_rgba8())
                .collect()
        } else {
            Vec::new()
        };
        Self {
            scheme,
            max_iterations,
            lut,
        }
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// HSB color for count `n`.
    pub fn pick(&self, n: u32) -> HsbColor {
        pick_color(n, self.max_iterations, &self.scheme)
    }

    /// Opaque RGBA color for count `n`.
    #[inline]
    pub fn rgba(&self, n: u32) -> [u8; 4] {
        match self.lut.get(n as usize) {
            Some(&c) => c,
            None => self.pick(n).to_rgba8(),
        }
    }

    /// Color a whole iteration buffer.
    pub fn colorize(&self, iter_buf: &IterationBuffer) -> PixelBuffer {
        let mut pixels = vec![0u8; iter_buf.data.len() * 4];
        pixels
            .par_chunks_mut(4)
            .zip(iter_buf.data.par_iter())
            .for_each(|(pixel, &n)| pixel.copy_from_slice(&self.rgba(n)));
        PixelBuffer {
            size: iter_buf.size,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn gradient(c1: HsbColor, c2: HsbColor) -> ColorScheme {
        ColorScheme {
            color1: c1,
            color2: c2,
            psychedelic: false,
        }
    }

    fn psychedelic(c1: HsbColor) -> ColorScheme {
        ColorScheme {
            color1: c1,
            color2: HsbColor::WHITE,
            psychedelic: true,
        }
    }

    #[test]
    fn inside_is_black_in_both_modes() {
        for scheme in [ColorScheme::gradient(), ColorScheme::psychedelic()] {
            for n in [100, 101] {
                let c = pick_color(n, 100, &scheme);
                assert_eq!(c.brightness, 0.0);
                assert_eq!(c.to_rgb8(), [0, 0, 0]);
            }
        }
    }

    #[test]
    fn gradient_hue_interpolates() {
        let scheme = gradient(HsbColor::new(0.0, 1.0, 1.0), HsbColor::new(240.0, 1.0, 1.0));
        assert!((pick_color(0, 100, &scheme).hue - 0.0).abs() < EPSILON);
        assert!((pick_color(25, 100, &scheme).hue - 60.0).abs() < EPSILON);
        assert!((pick_color(50, 100, &scheme).hue - 120.0).abs() < EPSILON);
        assert!((pick_color(99, 100, &scheme).hue - 237.6).abs() < 1e-9);
    }

    #[test]
    fn gradient_averages_saturation_and_brightness() {
        let scheme = gradient(HsbColor::new(10.0, 0.2, 0.4), HsbColor::new(50.0, 0.8, 1.0));
        let c = pick_color(3, 10, &scheme);
        assert!((c.saturation - 0.5).abs() < EPSILON);
        assert!((c.brightness - 0.7).abs() < EPSILON);
    }

    #[test]
    fn psychedelic_hue_scales_with_escape_speed() {
        let scheme = psychedelic(HsbColor::new(200.0, 0.4, 1.0));
        let c = pick_color(10, 100, &scheme);
        assert!((c.hue - 2000.0).abs() < EPSILON);
        assert_eq!(c.saturation, 0.4);
        assert_eq!(c.brightness, 1.0);

        // Unwrapped hue still converts like its wrapped equivalent.
        let wrapped = HsbColor::new(2000.0 % 360.0, 0.4, 1.0);
        assert_eq!(c.to_rgb8(), wrapped.to_rgb8());
    }

    #[test]
    fn psychedelic_zero_count_uses_hue_zero() {
        let scheme = psychedelic(HsbColor::new(200.0, 0.4, 1.0));
        let c = pick_color(0, 100, &scheme);
        assert_eq!(c.hue, 0.0);
        assert!(c.hue.is_finite());
        assert_eq!(c.brightness, 1.0);
    }

    #[test]
    fn mapper_matches_pick_color() {
        for scheme in [ColorScheme::gradient(), ColorScheme::psychedelic()] {
            let mapper = ColorMapper::new(scheme, 50);
            for n in 0..=51 {
                assert_eq!(mapper.rgba(n), pick_color(n, 50, &scheme).to_rgba8());
            }
        }
    }

    #[test]
    fn mapper_without_lut_matches_pick_color() {
        let max = LUT_MAX_ITERATIONS + 10;
        let mapper = ColorMapper::new(ColorScheme::psychedelic(), max);
        assert!(mapper.lut.is_empty());
        for n in [0, 1, 7, max - 1, max, max + 1] {
            assert_eq!(
                mapper.rgba(n),
                pick_color(n, max, &ColorScheme::psychedelic()).to_rgba8()
            );
        }
    }

    #[test]
    fn colorize_produces_correct_size() {
        let mapper = ColorMapper::new(ColorScheme::default(), 25);
        let mut buf = IterationBuffer::new(8, 25);
        buf.data[0] = 26;
        buf.data[1] = 3;
        let px = mapper.colorize(&buf);
        assert_eq!(px.size, 8);
        assert_eq!(px.pixels.len(), 8 * 8 * 4);
        assert_eq!(px.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(px.pixel(1, 0), mapper.rgba(3));
    }
}
