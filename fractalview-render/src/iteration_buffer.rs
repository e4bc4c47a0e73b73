/// Raw escape-time counts for a full frame, row-major.
///
/// This is the renderer's output before coloring. Keeping counts separate
/// from pixels lets a caller switch colors without re-iterating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationBuffer {
    pub size: u32,
    pub max_iterations: u32,
    pub data: Vec<u32>,
}

impl IterationBuffer {
    pub fn new(size: u32, max_iterations: u32) -> Self {
        Self {
            size,
            max_iterations,
            data: vec![0; size as usize * size as usize],
        }
    }

    /// Count at pixel `(px, py)`.
    pub fn get(&self, px: u32, py: u32) -> u32 {
        self.data[py as usize * self.size as usize + px as usize]
    }

    /// Number of pixels treated as inside the set.
    pub fn interior_count(&self) -> usize {
        self.data
            .iter()
            .filter(|&&n| n >= self.max_iterations)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buf = IterationBuffer::new(5, 10);
        assert_eq!(buf.data.len(), 25);
        assert!(buf.data.iter().all(|&n| n == 0));
        assert_eq!(buf.interior_count(), 0);
    }

    #[test]
    fn get_is_row_major() {
        let mut buf = IterationBuffer::new(3, 10);
        buf.data[5] = 7; // row 1, column 2
        assert_eq!(buf.get(2, 1), 7);
        assert_eq!(buf.get(1, 2), 0);
    }

    #[test]
    fn interior_counts_saturated_pixels() {
        let mut buf = IterationBuffer::new(2, 10);
        buf.data = vec![10, 11, 9, 0];
        assert_eq!(buf.interior_count(), 2);
    }
}
