//! Nearest common ancestors of two ancestor maps

use crate::collapser::{merge_couple, PathCollapser};
use crate::EngineError;
use kinship_domain::{AncestorMap, CommonAncestor, CommonAncestorRecord, GraphAccessor};
use std::fmt::Display;
use tracing::debug;

/// Intersects two [`AncestorMap`]s and keeps the minimal-rank shared ancestors
///
/// Rank is `dist_a + dist_b`. When the minimal-rank set is exactly the father
/// and mother of one family (at equal distances) it is reported as a single
/// couple record; any other minimal-rank set is returned as separate records,
/// in A's discovery order followed by shared parentless families.
pub struct CommonAncestorFinder<'g, G> {
    graph: &'g G,
}

impl<'g, G> CommonAncestorFinder<'g, G>
where
    G: GraphAccessor,
    G::Error: Display,
{
    /// Create a finder over `graph`
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Nearest common ancestors; empty when the maps share nothing
    pub fn find(
        &self,
        map_a: &AncestorMap,
        map_b: &AncestorMap,
    ) -> Result<Vec<CommonAncestorRecord>, EngineError> {
        let mut shared = intersect(map_a, map_b);

        let Some(min_rank) = shared.iter().map(CommonAncestorRecord::rank).min() else {
            debug!("No common ancestor for {} and {}", map_a.root(), map_b.root());
            return Ok(Vec::new());
        };
        shared.retain(|r| r.rank() == min_rank);

        if let [first, second] = shared.as_slice() {
            if let (CommonAncestor::Person { handle: a }, CommonAncestor::Person { handle: b }) =
                (&first.ancestor, &second.ancestor)
            {
                if first.dist_a == second.dist_a {
                    if let Some(couple) = PathCollapser::new(self.graph).couple_of(a, b)? {
                        return Ok(vec![merge_couple(couple, first, second)]);
                    }
                }
            }
        }

        debug!(
            "{} common ancestor(s) of {} and {} at rank {}",
            shared.len(),
            map_a.root(),
            map_b.root(),
            min_rank
        );
        Ok(shared)
    }
}

/// Every ancestral unit present in both maps, unfiltered
pub fn intersect(map_a: &AncestorMap, map_b: &AncestorMap) -> Vec<CommonAncestorRecord> {
    let people = map_a.iter().filter_map(|(handle, a)| {
        map_b.get(handle).map(|b| CommonAncestorRecord {
            ancestor: CommonAncestor::person(handle.clone()),
            dist_a: a.generation,
            dist_b: b.generation,
            by_birth_a: a.by_birth,
            by_birth_b: b.by_birth,
        })
    });

    let families = map_a.family_markers().iter().filter_map(|a| {
        map_b.family_marker(&a.family).map(|b| CommonAncestorRecord {
            ancestor: CommonAncestor::ParentlessFamily {
                family: a.family.clone(),
            },
            dist_a: a.generation,
            dist_b: b.generation,
            by_birth_a: a.by_birth,
            by_birth_b: b.by_birth,
        })
    });

    people.chain(families).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{clan, h, tree};
    use crate::AncestorIndexer;
    use kinship_domain::{FamilyHandle, Gender, PersonHandle, UnionType};
    use kinship_store::MemoryStore;

    fn find(store: &MemoryStore, a: &str, b: &str) -> Vec<CommonAncestorRecord> {
        let indexer = AncestorIndexer::new(store);
        let map_a = indexer.ancestors_of(&h(a)).unwrap();
        let map_b = indexer.ancestors_of(&h(b)).unwrap();
        CommonAncestorFinder::new(store).find(&map_a, &map_b).unwrap()
    }

    fn people(records: &[CommonAncestorRecord]) -> Vec<Vec<PersonHandle>> {
        records
            .iter()
            .map(|r| r.ancestor.handles().into_iter().cloned().collect())
            .collect()
    }

    #[test]
    fn test_full_siblings_share_a_couple() {
        let store = clan();
        let records = find(&store, "a", "a2");

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].ancestor,
            CommonAncestor::Couple {
                family: FamilyHandle::from("FP1"),
                father: h("p1"),
                mother: h("s1"),
            }
        );
        assert_eq!((records[0].dist_a, records[0].dist_b), (1, 1));
    }

    #[test]
    fn test_first_cousins_share_grandparents() {
        let store = clan();
        let records = find(&store, "a", "b");
        assert_eq!(people(&records), vec![vec![h("g1"), h("g2")]]);
        assert_eq!((records[0].dist_a, records[0].dist_b), (2, 2));
    }

    #[test]
    fn test_lineal_common_ancestor_is_the_elder() {
        let store = clan();
        let records = find(&store, "p3", "e");
        assert_eq!(people(&records), vec![vec![h("p3")]]);
        assert_eq!((records[0].dist_a, records[0].dist_b), (0, 3));
    }

    #[test]
    fn test_half_siblings_share_one_parent() {
        let store = tree(
            &[
                ("dad", Gender::Male),
                ("mum1", Gender::Female),
                ("mum2", Gender::Female),
                ("x", Gender::Male),
                ("y", Gender::Female),
            ],
            &[
                ("F1", Some("dad"), Some("mum1"), &["x"]),
                ("F2", Some("dad"), Some("mum2"), &["y"]),
            ],
        );
        let records = find(&store, "x", "y");
        assert_eq!(people(&records), vec![vec![h("dad")]]);
    }

    #[test]
    fn test_double_cousins_keep_separate_records() {
        // two brothers marry two sisters
        let store = tree(
            &[
                ("gf1", Gender::Male),
                ("gm1", Gender::Female),
                ("gf2", Gender::Male),
                ("gm2", Gender::Female),
                ("bro1", Gender::Male),
                ("bro2", Gender::Male),
                ("sis1", Gender::Female),
                ("sis2", Gender::Female),
                ("x", Gender::Male),
                ("y", Gender::Female),
            ],
            &[
                ("FA", Some("gf1"), Some("gm1"), &["bro1", "bro2"]),
                ("FB", Some("gf2"), Some("gm2"), &["sis1", "sis2"]),
                ("F1", Some("bro1"), Some("sis1"), &["x"]),
                ("F2", Some("bro2"), Some("sis2"), &["y"]),
            ],
        );

        let records = find(&store, "x", "y");
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.rank() == 4));

        let collapsed = PathCollapser::new(&store).collapse(records).unwrap();
        assert_eq!(collapsed.len(), 2);
    }

    #[test]
    fn test_parentless_family_links_siblings() {
        let mut store = MemoryStore::new();
        store.insert_person("x", Gender::Male).unwrap();
        store.insert_person("y", Gender::Female).unwrap();
        store.add_union("F0", None, None, UnionType::Unknown).unwrap();
        store.add_birth_child("F0", "x").unwrap();
        store.add_birth_child("F0", "y").unwrap();

        let records = find(&store, "x", "y");
        assert_eq!(
            records,
            vec![CommonAncestorRecord {
                ancestor: CommonAncestor::ParentlessFamily {
                    family: FamilyHandle::from("F0"),
                },
                dist_a: 1,
                dist_b: 1,
                by_birth_a: true,
                by_birth_b: true,
            }]
        );
    }

    #[test]
    fn test_disjoint_trees_are_unrelated() {
        let store = clan();
        assert!(find(&store, "a", "s2").is_empty());
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let store = clan();
        let ab = find(&store, "a", "e");
        let ba = find(&store, "e", "a");
        let swapped: Vec<_> = ba.iter().map(CommonAncestorRecord::swapped).collect();
        assert_eq!(ab, swapped);
    }
}
