//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Relationship query error
    #[error(transparent)]
    Engine(#[from] kinship_engine::EngineError),

    /// Family-tree loading error
    #[error("Family tree error: {0}")]
    Store(#[from] kinship_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// No family-tree file given on the command line or in the config
    #[error("No family tree given. Use --tree or set settings.tree in the config file.")]
    NoTree,

    /// No phrase table for the configured locale
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}
