//! Relationship descriptor module
//!
//! A descriptor answers "what is B to A" structurally. It never carries
//! display text; rendering belongs to a [`crate::RelationshipFormatter`].

use crate::UnionType;
use serde::{Deserialize, Serialize};

/// Structural kind of a relationship, read as "B is A's ..."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationshipKind {
    /// A and B are the same person
    SamePerson,

    /// B is A's spouse or partner
    Spouse {
        /// Union recorded on the shared family
        union: UnionType,
    },

    /// B is A's parent (1), grandparent (2), ...
    LinealAncestor {
        /// Generations between A and B
        generations: u32,
    },

    /// B is A's child (1), grandchild (2), ...
    LinealDescendant {
        /// Generations between A and B
        generations: u32,
    },

    /// B is A's sibling
    Sibling,

    /// B is A's aunt/uncle (0), great-aunt/uncle (1), ...
    AuntUncle {
        /// Extra generations beyond aunt/uncle
        removal: u32,
    },

    /// B is A's niece/nephew (0), grand-niece/nephew (1), ...
    NieceNephew {
        /// Extra generations beyond niece/nephew
        removal: u32,
    },

    /// B is A's Nth cousin M times removed
    Cousin {
        /// 1 = first cousin, 2 = second cousin, ...
        degree: u32,
        /// Generations of offset between the two cousins
        removal: u32,
    },

    /// No shared ancestor and no spousal connection
    Unrelated,
}

/// Whose spouse bridges an in-law relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InLawSide {
    /// B is a blood relative of A's spouse (A's father-in-law, stepchild)
    A,
    /// B is the spouse of A's blood relative (A's sister-in-law, stepmother)
    B,
}

/// A relationship kind plus its qualifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    /// Structural kind
    #[serde(flatten)]
    pub kind: RelationshipKind,

    /// Every parent link on both routes is a birth link
    pub by_birth: bool,

    /// The relationship is mediated by a spousal union
    pub in_law: bool,

    /// Set together with `in_law`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_law_side: Option<InLawSide>,
}

impl RelationshipDescriptor {
    /// Blood (or trivially birth) descriptor for `kind`
    pub fn new(kind: RelationshipKind, by_birth: bool) -> Self {
        Self {
            kind,
            by_birth,
            in_law: false,
            in_law_side: None,
        }
    }

    /// A and B are the same person
    pub fn same_person() -> Self {
        Self::new(RelationshipKind::SamePerson, true)
    }

    /// B is A's spouse
    pub fn spouse(union: UnionType) -> Self {
        Self::new(RelationshipKind::Spouse { union }, true)
    }

    /// No relationship found
    pub fn unrelated() -> Self {
        Self::new(RelationshipKind::Unrelated, true)
    }

    /// Mark this descriptor as an in-law relationship bridged by the
    /// spouse on `side`
    pub fn into_in_law(self, side: InLawSide) -> Self {
        Self {
            in_law: true,
            in_law_side: Some(side),
            ..self
        }
    }

    /// B is a step-relation of A: the spouse of A's ancestor, or the
    /// descendant of A's spouse
    pub fn is_step(&self) -> bool {
        matches!(
            (self.in_law_side, self.kind),
            (Some(InLawSide::B), RelationshipKind::LinealAncestor { .. })
                | (Some(InLawSide::A), RelationshipKind::LinealDescendant { .. })
        )
    }

    /// Whether any relationship was found
    pub fn is_related(&self) -> bool {
        !matches!(self.kind, RelationshipKind::Unrelated)
    }

    /// Whether B shares blood ancestry with A (in-law relationships excluded)
    pub fn is_blood(&self) -> bool {
        !self.in_law
            && !matches!(
                self.kind,
                RelationshipKind::Unrelated
                    | RelationshipKind::Spouse { .. }
                    | RelationshipKind::SamePerson
            )
    }
}
