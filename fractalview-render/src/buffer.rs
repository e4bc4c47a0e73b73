/// An RGBA pixel buffer holding one rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Side length; the image is `size × size`.
    pub size: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer filled with black (opaque).
    pub fn new(size: u32) -> Self {
        let mut pixels = vec![0u8; size as usize * size as usize * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self { size, pixels }
    }

    /// RGBA value of pixel `(px, py)`.
    pub fn pixel(&self, px: u32, py: u32) -> [u8; 4] {
        let idx = (py as usize * self.size as usize + px as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Iterate pixels row-major.
    pub fn iter(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.pixels
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black_opaque() {
        let buf = PixelBuffer::new(4);
        assert_eq!(buf.pixels.len(), 4 * 4 * 4);
        assert!(buf.iter().all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let mut buf = PixelBuffer::new(3);
        let idx = (2 * 3 + 1) * 4;
        buf.pixels[idx..idx + 4].copy_from_slice(&[255, 0, 0, 255]);
        assert_eq!(buf.pixel(1, 2), [255, 0, 0, 255]);
        assert_eq!(buf.pixel(2, 1), [0, 0, 0, 255]);
    }
}
