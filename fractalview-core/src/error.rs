use thiserror::Error;

/// Errors originating from the core fractal engine.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid image size: {0} (must be > 0)")]
    InvalidImageSize(u32),

    #[error("invalid view radius: {0} (must be positive and finite)")]
    InvalidRadius(f64),

    #[error("invalid max iterations: {0} (must be in 1..={limit})", limit = crate::MAX_ITERATIONS_LIMIT)]
    InvalidMaxIterations(u32),

    #[error("invalid view center: ({re}, {im}) (must be finite)")]
    InvalidCenter { re: f64, im: f64 },

    #[error("invalid color {input:?}: expected six hex digits (rrggbb)")]
    InvalidColor { input: String },
}
