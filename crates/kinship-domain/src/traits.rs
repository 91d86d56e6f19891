//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the relationship core and the
//! layers around it. Implementations live in other crates.

use crate::{Family, FamilyHandle, Gender, Person, PersonHandle, RelationshipDescriptor};

/// Read-only access to person and family records
///
/// Implemented by the storage layer (kinship-store). Lookups of unknown
/// handles return `Ok(None)`; `Err` is reserved for storage failures.
pub trait GraphAccessor {
    /// Error type for storage operations
    type Error;

    /// Get a person by handle
    fn get_person(&self, handle: &PersonHandle) -> Result<Option<Person>, Self::Error>;

    /// Get a family by handle
    fn get_family(&self, handle: &FamilyHandle) -> Result<Option<Family>, Self::Error>;

    /// All people, in store order (used by bulk filters)
    fn people(&self) -> Result<Vec<Person>, Self::Error>;
}

impl<G: GraphAccessor + ?Sized> GraphAccessor for &G {
    type Error = G::Error;

    fn get_person(&self, handle: &PersonHandle) -> Result<Option<Person>, Self::Error> {
        (**self).get_person(handle)
    }

    fn get_family(&self, handle: &FamilyHandle) -> Result<Option<Family>, Self::Error> {
        (**self).get_family(handle)
    }

    fn people(&self) -> Result<Vec<Person>, Self::Error> {
        (**self).people()
    }
}

/// Locale-specific rendering of relationship descriptors
///
/// Implemented by the presentation layer (kinship-cli ships English).
pub trait RelationshipFormatter {
    /// Locale tag this formatter renders (e.g. `en`)
    fn locale(&self) -> &str;

    /// Render what B is to A, where `gender` is B's gender
    fn format(&self, descriptor: &RelationshipDescriptor, gender: Gender) -> String;
}
