//! Family-tree documents
//!
//! A document is a flat list of people and families. Either side of a link
//! may be omitted; [`MemoryStore::normalize`] fills in the other side on load.
//!
//! ```toml
//! [[people]]
//! handle = "I1"
//! gender = "male"
//!
//! [[people]]
//! handle = "I2"
//! parent_families = [{ family = "F1", father_relation = "adopted" }]
//!
//! [[families]]
//! handle = "F1"
//! father = "I1"
//! union_type = "married"
//! ```

use crate::{MemoryStore, StoreError};
use kinship_domain::{Family, Person};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialization format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl DocumentFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Serializable record set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyTreeDocument {
    /// Person records
    #[serde(default)]
    pub people: Vec<Person>,

    /// Family records
    #[serde(default)]
    pub families: Vec<Family>,
}

impl FamilyTreeDocument {
    /// Parse a document from text
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, StoreError> {
        Ok(match format {
            DocumentFormat::Json => serde_json::from_str(text)?,
            DocumentFormat::Toml => toml::from_str(text)?,
        })
    }

    /// Read a document, choosing the format from the extension
    pub fn read(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        Self::parse(&text, format)
    }

    /// Render the document as text
    pub fn render(&self, format: DocumentFormat) -> Result<String, StoreError> {
        Ok(match format {
            DocumentFormat::Json => serde_json::to_string_pretty(self)?,
            DocumentFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Write the document, choosing the format from the extension
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        fs::write(path, self.render(format)?)?;
        Ok(())
    }

    /// Build a normalized store from this document
    pub fn into_store(self) -> Result<MemoryStore, StoreError> {
        let mut store = MemoryStore::new();
        for person in self.people {
            store.add_person(person)?;
        }
        for family in self.families {
            store.add_family(family)?;
        }

        let repaired = store.normalize();
        tracing::info!(
            "Loaded {} people and {} families ({} one-sided links repaired)",
            store.person_count(),
            store.family_count(),
            repaired
        );
        Ok(store)
    }

    /// Snapshot a store as a document
    pub fn from_store(store: &MemoryStore) -> Self {
        use kinship_domain::GraphAccessor;

        let people = match store.people() {
            Ok(people) => people,
            Err(never) => match never {},
        };
        Self {
            people,
            families: store.families().cloned().collect(),
        }
    }
}

impl MemoryStore {
    /// Load a store from a JSON or TOML family-tree document
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        FamilyTreeDocument::read(path)?.into_store()
    }
}
