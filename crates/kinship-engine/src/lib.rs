//! Kinship Relationship Engine
//!
//! Resolves how two people in a family graph are related.
//!
//! ## Pipeline
//!
//! Each query runs as a straight line with early exits:
//!
//! 1. Same person: `SamePerson`
//! 2. [`SpouseRelationDetector`]: the two are parents of one family
//! 3. [`AncestorIndexer`] builds an ancestor map for each person
//! 4. [`CommonAncestorFinder`] keeps the minimal-rank shared ancestors
//! 5. [`PathCollapser`] merges the two parents of a family into one couple
//! 6. [`RelationshipClassifier`] turns the distance pair into a descriptor
//! 7. In-law fallback: the same blood search with either person's spouse
//!    substituted, marked `in_law` with the side whose spouse bridged it
//!
//! Nothing is cached between queries. Dangling handles and cyclic records
//! are skipped during traversal; only a queried person that does not exist
//! is an error.
//!
//! ## Orientation
//!
//! Descriptors read as "B is A's ...": `relationship(kid, mum)` is
//! `LinealAncestor { generations: 1 }`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod classifier;
mod collapser;
mod config;
mod engine;
mod error;
mod finder;
mod indexer;
mod spouse;

#[cfg(test)]
mod test_support;

pub use classifier::RelationshipClassifier;
pub use collapser::PathCollapser;
pub use config::EngineConfig;
pub use engine::{Relationship, RelationshipEngine};
pub use error::EngineError;
pub use finder::{intersect, CommonAncestorFinder};
pub use indexer::AncestorIndexer;
pub use spouse::SpouseRelationDetector;
