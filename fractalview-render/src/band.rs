/// Rows per band. Each band is one unit of parallel work and one
/// cancellation checkpoint.
pub const BAND_HEIGHT: u32 = 16;

/// A horizontal strip of full-width rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First row of the band.
    pub y: u32,
    /// Number of rows (the last band may be shorter).
    pub height: u32,
    /// Row width in pixels.
    pub width: u32,
}

impl Band {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Rows covered, as a range.
    pub fn rows(&self) -> std::ops::Range<u32> {
        self.y..self.y + self.height
    }
}

/// Split a `size × size` grid into bands of [`BAND_HEIGHT`] rows, top to
/// bottom.
///
/// Band `i` covers exactly the `i`-th chunk of `BAND_HEIGHT · size` pixels of
/// a row-major buffer, so bands can be zipped with `chunks_mut`.
pub fn build_bands(size: u32) -> Vec<Band> {
    let mut bands = Vec::with_capacity(size.div_ceil(BAND_HEIGHT) as usize);
    let mut y = 0;
    while y < size {
        let height = BAND_HEIGHT.min(size - y);
        bands.push(Band {
            y,
            height,
            width: size,
        });
        y += height;
    }
    bands
}
