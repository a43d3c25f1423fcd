/// Convenience result type used across blobposter.
pub type PosterResult<T> = Result<T, PosterError>;

/// Top-level error taxonomy used by poster APIs.
#[derive(thiserror::Error, Debug)]
pub enum PosterError {
    /// Out-of-range or inconsistent render parameters.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Rasterization, label or export failures.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosterError {
    /// Build a [`PosterError::InvalidParameter`] value.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`PosterError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PosterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
