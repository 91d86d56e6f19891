//! Error types for storage operations

use kinship_domain::{FamilyHandle, PersonHandle};
use thiserror::Error;

/// Errors that can occur while building or loading a record set
#[derive(Error, Debug)]
pub enum StoreError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML document
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Document could not be serialized as TOML
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Unrecognized document extension
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// A person with this handle already exists
    #[error("Duplicate person: {0}")]
    DuplicatePerson(PersonHandle),

    /// A family with this handle already exists
    #[error("Duplicate family: {0}")]
    DuplicateFamily(FamilyHandle),

    /// Builder referenced a person that does not exist
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonHandle),

    /// Builder referenced a family that does not exist
    #[error("Unknown family: {0}")]
    UnknownFamily(FamilyHandle),
}
