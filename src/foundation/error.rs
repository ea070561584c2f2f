/// Convenience result type used across treeviz.
pub type TreeResult<T> = Result<T, TreeError>;

/// Error taxonomy for the fallible edges of the crate (config, tree loading, IO).
///
/// Geometry and path generation never fail; they fall back to defaults instead.
#[derive(thiserror::Error, Debug)]
pub enum TreeError {
    /// Invalid user-provided configuration or hierarchy data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TreeError {
    /// Build a [`TreeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TreeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TreeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
