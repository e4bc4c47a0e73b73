pub mod color;
pub mod complex;
pub mod config;
pub mod error;
pub mod escape;
pub mod viewport;

// Re-export primary types for convenience.
pub use color::{ColorScheme, HsbColor};
pub use complex::Complex;
pub use config::{RenderConfig, Step, SIZE_PRESETS};
pub use error::CoreError;
pub use escape::{iterate, julia_constant, EscapeTime, FractalKind, JULIA_CONSTANT_RADIUS};
pub use viewport::ViewWindow;

/// Largest accepted iteration budget. Keeps the `max + 1` saturation count
/// representable in a `u32`.
pub const MAX_ITERATIONS_LIMIT: u32 = 1 << 24;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
