use std::fmt::Debug;

/// Convenience result type used across joinery.
pub type JoineryResult<T> = Result<T, JoineryError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum JoineryError {
    /// A scene element with this key already exists in the registry.
    #[error("duplicate scene key: {0}")]
    DuplicateKey(String),

    /// No scene element with this key exists in the registry.
    #[error("unknown scene key: {0}")]
    UnknownKey(String),

    /// Invalid user-provided configuration or placement data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JoineryError {
    /// Build a [`JoineryError::DuplicateKey`] from any debuggable key.
    pub fn duplicate_key(key: &impl Debug) -> Self {
        Self::DuplicateKey(format!("{key:?}"))
    }

    /// Build a [`JoineryError::UnknownKey`] from any debuggable key.
    pub fn unknown_key(key: &impl Debug) -> Self {
        Self::UnknownKey(format!("{key:?}"))
    }

    /// Build a [`JoineryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`JoineryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
