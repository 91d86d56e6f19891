//! Error types for relationship queries

use kinship_domain::PersonHandle;
use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur during a relationship query
///
/// Incomplete or inconsistent records never produce an error; traversal
/// skips what it cannot resolve. Only a queried handle that does not exist
/// at all, or a failing storage layer, is reported.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A queried person does not exist
    #[error("Person not found: {0}")]
    PersonNotFound(PersonHandle),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),
}

impl EngineError {
    pub(crate) fn store(err: impl Display) -> Self {
        EngineError::Store(err.to_string())
    }
}
