//! Handle module - stable identifiers for person and family records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable unique identifier for a person record
///
/// Handles are opaque strings assigned by the record store. They are unique
/// and stable for the duration of a query, which lets them double as map keys
/// and visited markers during traversal.
///
/// # Examples
///
/// ```
/// use kinship_domain::PersonHandle;
///
/// let handle = PersonHandle::from("I0001");
/// assert_eq!(handle.as_str(), "I0001");
/// assert_eq!(handle.to_string(), "I0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonHandle(String);

impl PersonHandle {
    /// Create a handle from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the handle as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonHandle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonHandle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable unique identifier for a family record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyHandle(String);

impl FamilyHandle {
    /// Create a handle from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the handle as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FamilyHandle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FamilyHandle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FamilyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_ordering() {
        let a = PersonHandle::from("I0001");
        let b = PersonHandle::from("I0002");

        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_handle_serializes_as_plain_string() {
        let handle = FamilyHandle::from("F0007");
        let json = serde_json::to_string(&handle).unwrap();
        assert_eq!(json, "\"F0007\"");

        let parsed: FamilyHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, handle);
    }
}
