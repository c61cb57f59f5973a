//! Error types for labsite-core

use std::path::PathBuf;

use labsite_domain::ProfileError;
use thiserror::Error;

/// Result type alias for content loading
pub type Result<T> = std::result::Result<T, ContentError>;

/// Failure to load a content file
#[derive(Error, Debug)]
pub enum ContentError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape
    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A layout profile failed validation
    #[error("Invalid profile in {path}: {source}")]
    Profile {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },

    /// An id that cannot name a content file
    #[error("Invalid content id: {0:?}")]
    InvalidId(String),
}

/// Site configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Site config already initialized")]
    AlreadyInitialized,

    #[error("Site config not initialized")]
    NotInitialized,
}
