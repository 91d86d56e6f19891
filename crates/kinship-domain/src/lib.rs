//! Kinship Domain Layer
//!
//! This crate defines the value types and trait seams shared by every other
//! Kinship crate. It performs no I/O and holds no state beyond the values it
//! describes.
//!
//! ## Key Concepts
//!
//! - **Person / Family**: genealogical records linked by parent-family and
//!   own-family (spousal) links, identified by stable handles
//! - **Child relation**: how a child is attached to each parent of a family
//!   (birth, adopted, step, unknown)
//! - **Ancestor map**: per-query index of every ancestor and its minimal
//!   generation distance
//! - **Common ancestor record**: a shared ancestor (person, couple or
//!   parentless family) plus the distance from each queried person
//! - **Relationship descriptor**: the structural, language-agnostic answer to
//!   "how is B related to A"
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency (descriptors are emitted as JSON)
//! - Storage is reached through [`traits::GraphAccessor`]
//! - Display strings are produced through [`traits::RelationshipFormatter`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ancestry;
pub mod descriptor;
pub mod family;
pub mod handle;
pub mod person;
pub mod traits;

// Re-exports for convenience
pub use ancestry::{
    AncestorEntry, AncestorMap, CommonAncestor, CommonAncestorRecord, FamilyMarker, Visit,
};
pub use descriptor::{InLawSide, RelationshipDescriptor, RelationshipKind};
pub use family::{Family, UnionType};
pub use handle::{FamilyHandle, PersonHandle};
pub use person::{ChildRelation, Gender, ParentFamilyLink, Person};
pub use traits::{GraphAccessor, RelationshipFormatter};
