use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("render cancelled")]
    Cancelled,

    #[error("invalid render config: {0}")]
    Config(#[from] fractalview_core::CoreError),
}
