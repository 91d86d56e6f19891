//! Generation distances to relationship descriptors
//!
//! Descriptors read as "B is A's ...". `dist_a` and `dist_b` are the
//! generations from A and from B up to the shared ancestor.

use kinship_domain::{CommonAncestorRecord, RelationshipDescriptor, RelationshipKind};

/// Stateless mapping from distance pairs to [`RelationshipDescriptor`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct RelationshipClassifier;

impl RelationshipClassifier {
    /// Classify a distance pair
    ///
    /// `(0, 0)` is the same person. Otherwise:
    ///
    /// | dist_a | dist_b | B is A's                          |
    /// |--------|--------|-----------------------------------|
    /// | n      | 0      | ancestor, n generations up        |
    /// | 0      | n      | descendant, n generations down    |
    /// | 1      | 1      | sibling                           |
    /// | n ≥ 2  | 1      | aunt/uncle, removal n - 2         |
    /// | 1      | n ≥ 2  | niece/nephew, removal n - 2       |
    /// | n ≥ 2  | m ≥ 2  | cousin min(n, m) - 1, removal \|n - m\| |
    pub fn classify(dist_a: u32, dist_b: u32, by_birth: bool) -> RelationshipDescriptor {
        let kind = match (dist_a, dist_b) {
            (0, 0) => return RelationshipDescriptor::same_person(),
            (generations, 0) => RelationshipKind::LinealAncestor { generations },
            (0, generations) => RelationshipKind::LinealDescendant { generations },
            (1, 1) => RelationshipKind::Sibling,
            (a, 1) => RelationshipKind::AuntUncle { removal: a - 2 },
            (1, b) => RelationshipKind::NieceNephew { removal: b - 2 },
            (a, b) => RelationshipKind::Cousin {
                degree: a.min(b) - 1,
                removal: a.abs_diff(b),
            },
        };
        RelationshipDescriptor::new(kind, by_birth)
    }

    /// Classify a common-ancestor record; by-birth only when both routes are
    pub fn classify_record(record: &CommonAncestorRecord) -> RelationshipDescriptor {
        Self::classify(record.dist_a, record.dist_b, record.by_birth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::{CommonAncestor, PersonHandle};
    use proptest::prelude::*;

    fn kind(dist_a: u32, dist_b: u32) -> RelationshipKind {
        RelationshipClassifier::classify(dist_a, dist_b, true).kind
    }

    #[test]
    fn test_lineal() {
        assert_eq!(kind(1, 0), RelationshipKind::LinealAncestor { generations: 1 });
        assert_eq!(kind(3, 0), RelationshipKind::LinealAncestor { generations: 3 });
        assert_eq!(kind(0, 2), RelationshipKind::LinealDescendant { generations: 2 });
    }

    #[test]
    fn test_collateral_boundaries() {
        assert_eq!(kind(0, 0), RelationshipKind::SamePerson);
        assert_eq!(kind(1, 1), RelationshipKind::Sibling);
        assert_eq!(kind(2, 1), RelationshipKind::AuntUncle { removal: 0 });
        assert_eq!(kind(3, 1), RelationshipKind::AuntUncle { removal: 1 });
        assert_eq!(kind(1, 2), RelationshipKind::NieceNephew { removal: 0 });
        assert_eq!(kind(1, 4), RelationshipKind::NieceNephew { removal: 2 });
    }

    #[test]
    fn test_cousins() {
        assert_eq!(kind(2, 2), RelationshipKind::Cousin { degree: 1, removal: 0 });
        assert_eq!(kind(2, 3), RelationshipKind::Cousin { degree: 1, removal: 1 });
        assert_eq!(kind(2, 4), RelationshipKind::Cousin { degree: 1, removal: 2 });
        assert_eq!(kind(3, 3), RelationshipKind::Cousin { degree: 2, removal: 0 });
        assert_eq!(kind(5, 3), RelationshipKind::Cousin { degree: 2, removal: 2 });
    }

    #[test]
    fn test_by_birth_needs_both_routes() {
        let record = CommonAncestorRecord {
            ancestor: CommonAncestor::person(PersonHandle::from("g")),
            dist_a: 2,
            dist_b: 0,
            by_birth_a: false,
            by_birth_b: true,
        };
        let descriptor = RelationshipClassifier::classify_record(&record);
        assert_eq!(descriptor.kind, RelationshipKind::LinealAncestor { generations: 2 });
        assert!(!descriptor.by_birth);
        assert!(!descriptor.in_law);
    }

    fn inverse(kind: RelationshipKind) -> RelationshipKind {
        match kind {
            RelationshipKind::LinealAncestor { generations } => {
                RelationshipKind::LinealDescendant { generations }
            }
            RelationshipKind::LinealDescendant { generations } => {
                RelationshipKind::LinealAncestor { generations }
            }
            RelationshipKind::AuntUncle { removal } => RelationshipKind::NieceNephew { removal },
            RelationshipKind::NieceNephew { removal } => RelationshipKind::AuntUncle { removal },
            other => other,
        }
    }

    proptest! {
        #[test]
        fn prop_swapping_sides_inverts(a in 0u32..40, b in 0u32..40) {
            prop_assert_eq!(kind(b, a), inverse(kind(a, b)));
        }

        #[test]
        fn prop_cousin_formula(a in 2u32..40, b in 2u32..40) {
            prop_assert_eq!(
                kind(a, b),
                RelationshipKind::Cousin { degree: a.min(b) - 1, removal: a.abs_diff(b) }
            );
        }

        #[test]
        fn prop_by_birth_is_carried(a in 0u32..10, b in 1u32..10, by_birth: bool) {
            let descriptor = RelationshipClassifier::classify(a, b, by_birth);
            prop_assert_eq!(descriptor.by_birth, by_birth);
        }
    }
}
