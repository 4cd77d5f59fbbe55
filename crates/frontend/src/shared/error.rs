//! Error types of the site behaviors.
//!
//! None of these reach the visitor: UI entry points log them and degrade.

use thiserror::Error;

/// Host document errors.
#[derive(Debug, Error)]
pub enum DomError {
    /// The document refused to create an element.
    #[error("failed to create <{0}> element")]
    CreateElement(String),
}

/// Browser key-value storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// `localStorage` is missing or blocked (privacy mode, sandboxed frame).
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed for '{key}': {message}")]
    Read { key: String, message: String },

    /// Quota exceeded or write rejected.
    #[error("storage write failed for '{key}': {message}")]
    Write { key: String, message: String },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Site configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
