//! Person module - individuals and their parent-family links

use crate::{FamilyHandle, PersonHandle};
use serde::{Deserialize, Serialize};

/// Recorded gender of a person
///
/// Only used by renderers to choose gendered wording (aunt vs uncle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,

    /// Not recorded
    #[default]
    Unknown,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }

    /// Parse a gender from a string (case-insensitive, single-letter forms accepted)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "unknown" | "u" | "" => Some(Gender::Unknown),
            _ => None,
        }
    }
}

/// How a child is attached to one parent of a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildRelation {
    /// Biological child
    #[default]
    Birth,

    /// Adopted child
    Adopted,

    /// Stepchild (child of the parent's partner)
    Step,

    /// Relation was not recorded
    Unknown,
}

impl ChildRelation {
    /// Whether this relation counts as "by birth"
    ///
    /// Unrecorded relations are treated as birth relations; records routinely
    /// omit the tag for biological children.
    pub fn is_birth(&self) -> bool {
        matches!(self, ChildRelation::Birth | ChildRelation::Unknown)
    }

    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildRelation::Birth => "birth",
            ChildRelation::Adopted => "adopted",
            ChildRelation::Step => "step",
            ChildRelation::Unknown => "unknown",
        }
    }
}

/// A link from a child to one of its parent families
///
/// Each side of the family carries its own relation tag: a child may be the
/// birth child of the mother and the stepchild of her husband.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentFamilyLink {
    /// The parent family
    pub family: FamilyHandle,

    /// Relation to the family's mother
    #[serde(default)]
    pub mother_relation: ChildRelation,

    /// Relation to the family's father
    #[serde(default)]
    pub father_relation: ChildRelation,
}

impl ParentFamilyLink {
    /// Create a link with explicit relation tags on both sides
    pub fn new(
        family: FamilyHandle,
        mother_relation: ChildRelation,
        father_relation: ChildRelation,
    ) -> Self {
        Self {
            family,
            mother_relation,
            father_relation,
        }
    }

    /// Create a birth link to both parents
    pub fn birth(family: FamilyHandle) -> Self {
        Self::new(family, ChildRelation::Birth, ChildRelation::Birth)
    }
}

/// A person record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub handle: PersonHandle,

    /// Recorded gender
    #[serde(default)]
    pub gender: Gender,

    /// Display name (not used by the relationship core)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Families this person is a child in, in record order
    #[serde(default)]
    pub parent_families: Vec<ParentFamilyLink>,

    /// Families this person is a parent in (spousal unions), in record order
    #[serde(default)]
    pub families: Vec<FamilyHandle>,
}

impl Person {
    /// Create a person with no links
    pub fn new(handle: PersonHandle, gender: Gender) -> Self {
        Self {
            handle,
            gender,
            name: None,
            parent_families: Vec::new(),
            families: Vec::new(),
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for display, falling back to the handle
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.handle.as_str())
    }
}
