/// Convenience result type used across zoomfx.
pub type ZoomfxResult<T> = Result<T, ZoomfxError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ZoomfxError {
    /// Malformed frame or bounding box handed to the normalizer or generator.
    #[error("input error: {0}")]
    Input(String),

    /// Effect window that cannot be mapped to progress (non-positive or non-finite duration).
    #[error("timing error: {0}")]
    Timing(String),

    /// Instruction or option values that fail field-level validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Export instruction carrying fields outside the allowed wire set.
    #[error("purity violation: disallowed fields [{}]", violations.join(", "))]
    Purity {
        /// Paths of every offending field, e.g. `$.scale` or `$.frame.depth`.
        violations: Vec<String>,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZoomfxError {
    /// Build a [`ZoomfxError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`ZoomfxError::Timing`] value.
    pub fn timing(msg: impl Into<String>) -> Self {
        Self::Timing(msg.into())
    }

    /// Build a [`ZoomfxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ZoomfxError::Purity`] value from offending field paths.
    pub fn purity(violations: Vec<String>) -> Self {
        Self::Purity { violations }
    }

    /// Build a [`ZoomfxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ZoomfxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
