//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid regex pattern for name filtering.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Invalid scratch buffer size.
    #[error("Invalid buffer size {value}: {reason}")]
    InvalidBufferSize {
        /// The rejected size in bytes
        value: usize,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid scope value.
    #[error(
        "Invalid scope '{value}': expected connected, global, context, remembered, or recent"
    )]
    InvalidScope {
        /// The invalid value provided
        value: String,
    },

    /// Invalid resource type value.
    #[error("Invalid resource type '{value}': expected any, disk, or print")]
    InvalidResourceType {
        /// The invalid value provided
        value: String,
    },

    /// Invalid display type value.
    #[error("Invalid display type '{value}'")]
    InvalidDisplayType {
        /// The invalid value provided
        value: String,
    },

    /// Invalid output format value.
    #[error("Invalid output format '{value}': expected text or json")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },
}
