//! Error types for mojicount
//!
//! Counting itself cannot fail. The errors here belong to the surfaces around
//! it: reading configuration, walking the file system and reading documents.

use crate::engine::file_walker::WalkError;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML or an unknown field or rule name
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed but semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Top-level error type for mojicount
#[derive(Debug, thiserror::Error)]
pub enum MojicountError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File discovery error
    #[error("File walker error: {0}")]
    Walk(#[from] WalkError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MojicountError {
    /// Whether this error comes from an unreadable or invalid configuration file
    pub fn is_config_parse(&self) -> bool {
        matches!(
            self,
            MojicountError::Config(ConfigError::Parse(_) | ConfigError::Validation(_))
        )
    }
}
