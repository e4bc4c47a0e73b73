pub mod band;
pub mod buffer;
pub mod error;
pub mod iteration_buffer;
pub mod palette;
pub mod renderer;

pub use band::BAND_HEIGHT;
pub use buffer::PixelBuffer;
pub use error::RenderError;
pub use iteration_buffer::IterationBuffer;
pub use palette::{pick_color, ColorMapper};
pub use renderer::{
    colorize, render, render_iterations, render_with_cancel, RenderCancel, RenderResult,
};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
