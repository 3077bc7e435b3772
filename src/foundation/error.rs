/// Result type returned by adcraft APIs.
pub type AdResult<T> = Result<T, AdError>;

/// Error kinds raised while loading, planning, rendering or exporting creatives.
#[derive(thiserror::Error, Debug)]
pub enum AdError {
    /// Invalid campaign data or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing, unreadable or undecodable input files.
    #[error("asset error: {0}")]
    Asset(String),

    /// No usable font, or a font that failed to load.
    #[error("font error: {0}")]
    Font(String),

    /// Failures while laying out or rasterizing a creative.
    #[error("render error: {0}")]
    Render(String),

    /// Failures while encoding or writing output.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdError {
    /// Build an [`AdError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AdError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build an [`AdError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build an [`AdError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`AdError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
