//! Error types for configuration and storage operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, validation, and when reading or writing the board and
//! theme stores.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration or store file.
    #[error("failed to read file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration or store file.
    #[error("failed to write file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A stored board snapshot could not be decoded or breaks the board rules.
    #[error("invalid board snapshot: {0}")]
    InvalidSnapshot(#[from] tack_protocol::BoardError),

    /// A sensor threshold is out of range.
    #[error("invalid sensor setting: {reason}")]
    InvalidSensor {
        /// The reason the setting is invalid.
        reason: String,
    },

    /// A store was told to fail.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Failed to determine the data directory.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
