//! Error types for scene construction, configuration and image output.

use thiserror::Error;

/// Errors that can occur while setting up or writing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Degenerate plane: edge vectors must span a parallelogram")]
    DegeneratePlane,

    #[error("Degenerate sphere: radius must be finite and non-zero, got {0}")]
    DegenerateSphere(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
