//! Family module - parental units

use crate::{FamilyHandle, PersonHandle};
use serde::{Deserialize, Serialize};

/// Type of union between the two parents of a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnionType {
    /// Married couple
    Married,

    /// Unmarried partners / civil union
    Partnered,

    /// Not recorded
    #[default]
    Unknown,
}

impl UnionType {
    /// Get the union type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            UnionType::Married => "married",
            UnionType::Partnered => "partnered",
            UnionType::Unknown => "unknown",
        }
    }
}

/// A family record: up to two parents plus their children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Unique identifier
    pub handle: FamilyHandle,

    /// Father, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<PersonHandle>,

    /// Mother, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<PersonHandle>,

    /// Children in record order
    #[serde(default)]
    pub children: Vec<PersonHandle>,

    /// Union type (used by the spouse detector only)
    #[serde(default)]
    pub union_type: UnionType,
}

impl Family {
    /// Create a family with no parents or children
    pub fn new(handle: FamilyHandle) -> Self {
        Self {
            handle,
            father: None,
            mother: None,
            children: Vec::new(),
            union_type: UnionType::Unknown,
        }
    }

    /// Recorded parents, father first
    pub fn parents(&self) -> impl Iterator<Item = &PersonHandle> {
        self.father.iter().chain(self.mother.iter())
    }

    /// Whether `a` and `b` are the two parents of this family, in either order
    pub fn is_couple(&self, a: &PersonHandle, b: &PersonHandle) -> bool {
        match (&self.father, &self.mother) {
            (Some(father), Some(mother)) => {
                (father == a && mother == b) || (father == b && mother == a)
            }
            _ => false,
        }
    }

    /// The other parent of this family, if `person` is one of its parents
    pub fn partner_of(&self, person: &PersonHandle) -> Option<&PersonHandle> {
        if self.father.as_ref() == Some(person) {
            self.mother.as_ref()
        } else if self.mother.as_ref() == Some(person) {
            self.father.as_ref()
        } else {
            None
        }
    }
}
