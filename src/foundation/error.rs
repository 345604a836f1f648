/// Convenience result type used across the crate.
pub type PolaroidResult<T> = Result<T, PolaroidError>;

/// Error taxonomy for layout and compositing.
#[derive(thiserror::Error, Debug)]
pub enum PolaroidError {
    /// Image width or height is zero.
    #[error("invalid dimension: {width}x{height}")]
    InvalidDimension {
        /// Offending width.
        width: u32,
        /// Offending height.
        height: u32,
    },

    /// The text measurement or shaping capability failed.
    #[error("text measurement failed: {0}")]
    Measurement(String),

    /// Invalid configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing configuration or captions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PolaroidError {
    /// Build a [`PolaroidError::InvalidDimension`] value.
    pub fn invalid_dimension(width: u32, height: u32) -> Self {
        Self::InvalidDimension { width, height }
    }

    /// Build a [`PolaroidError::Measurement`] value.
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Build a [`PolaroidError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PolaroidError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
