use crate::expression::error::ExprError;
use crate::mapping::error::ParseError;

/// Convenience result type used across framemap.
pub type FramemapResult<T> = Result<T, FramemapError>;

/// Top-level error taxonomy used by the public APIs.
#[derive(thiserror::Error, Debug)]
pub enum FramemapError {
    /// Invalid user-provided options or table dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// The expression string could not be compiled.
    #[error(transparent)]
    Expression(#[from] ExprError),

    /// A mapping string or file failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Errors when serializing or deserializing configuration or tables.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramemapError {
    /// Build a [`FramemapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramemapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
