//! Relationship query facade

use crate::{
    finder, AncestorIndexer, CommonAncestorFinder, EngineConfig, EngineError, PathCollapser,
    RelationshipClassifier, SpouseRelationDetector,
};
use kinship_domain::{
    AncestorMap, CommonAncestorRecord, GraphAccessor, InLawSide, PersonHandle,
    RelationshipDescriptor,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use tracing::debug;

/// Outcome of a relationship query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// What B is to A, classified from the first common-ancestor record
    pub descriptor: RelationshipDescriptor,

    /// Nearest common ancestors after couple collapsing; empty for the
    /// same-person, spouse and unrelated outcomes
    pub common_ancestors: Vec<CommonAncestorRecord>,

    /// The spouse substituted to find an in-law relationship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_spouse: Option<PersonHandle>,
}

impl Relationship {
    fn without_ancestors(descriptor: RelationshipDescriptor) -> Self {
        Self {
            descriptor,
            common_ancestors: Vec::new(),
            via_spouse: None,
        }
    }

    /// One descriptor per common-ancestor record
    ///
    /// Double cousins related through two couples get two descriptors.
    /// Outcomes without ancestors return just [`Self::descriptor`].
    pub fn descriptors(&self) -> Vec<RelationshipDescriptor> {
        if self.common_ancestors.is_empty() {
            return vec![self.descriptor];
        }
        self.common_ancestors
            .iter()
            .map(|record| {
                let descriptor = RelationshipClassifier::classify_record(record);
                match self.descriptor.in_law_side {
                    Some(side) => descriptor.into_in_law(side),
                    None => descriptor,
                }
            })
            .collect()
    }
}

/// Answers relationship queries over a read-only family graph
///
/// # Examples
///
/// ```
/// use kinship_domain::{Gender, RelationshipKind};
/// use kinship_engine::{EngineConfig, RelationshipEngine};
/// use kinship_store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// let mum = store.insert_person("mum", Gender::Female).unwrap();
/// let kid = store.insert_person("kid", Gender::Male).unwrap();
/// store.add_union("F1", None, Some("mum"), Default::default()).unwrap();
/// store.add_birth_child("F1", "kid").unwrap();
///
/// let engine = RelationshipEngine::new(&store, EngineConfig::default());
/// let rel = engine.relationship(&kid, &mum).unwrap();
/// assert_eq!(rel.descriptor.kind, RelationshipKind::LinealAncestor { generations: 1 });
/// ```
pub struct RelationshipEngine<G> {
    graph: G,
    config: EngineConfig,
}

impl<G> RelationshipEngine<G>
where
    G: GraphAccessor,
    G::Error: Display,
{
    /// Create an engine over `graph`
    pub fn new(graph: G, config: EngineConfig) -> Self {
        Self { graph, config }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying graph
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// What B is to A
    ///
    /// Same person, then a direct union, then shared ancestry, then (when
    /// enabled) shared ancestry through either person's spouse. A blood
    /// relationship always wins over an in-law one.
    pub fn relationship(
        &self,
        a: &PersonHandle,
        b: &PersonHandle,
    ) -> Result<Relationship, EngineError> {
        self.require(a)?;
        self.require(b)?;

        if a == b {
            return Ok(Relationship::without_ancestors(
                RelationshipDescriptor::same_person(),
            ));
        }

        if let Some(union) = SpouseRelationDetector::new(&self.graph).union_between(a, b)? {
            debug!("{} and {} are spouses ({})", a, b, union.as_str());
            return Ok(Relationship::without_ancestors(RelationshipDescriptor::spouse(
                union,
            )));
        }

        let records = self.blood(a, b)?;
        if let Some(first) = records.first() {
            return Ok(Relationship {
                descriptor: RelationshipClassifier::classify_record(first),
                common_ancestors: records,
                via_spouse: None,
            });
        }

        if self.config.search_in_law {
            if let Some(found) = self.in_law(a, b)? {
                return Ok(found);
            }
        }

        debug!("{} and {} are unrelated", a, b);
        Ok(Relationship::without_ancestors(
            RelationshipDescriptor::unrelated(),
        ))
    }

    /// Nearest common ancestors of A and B; empty when unrelated or identical
    pub fn common_ancestors(
        &self,
        a: &PersonHandle,
        b: &PersonHandle,
    ) -> Result<Vec<CommonAncestorRecord>, EngineError> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Ok(Vec::new());
        }
        self.blood(a, b)
    }

    /// Full ancestor map of `person` under the active configuration
    pub fn ancestor_map(&self, person: &PersonHandle) -> Result<AncestorMap, EngineError> {
        self.require(person)?;
        self.indexer().ancestors_of(person)
    }

    /// Ancestors at most `max_generations` above `person`, excluding them
    pub fn ancestors_within(
        &self,
        person: &PersonHandle,
        max_generations: u32,
    ) -> Result<BTreeSet<PersonHandle>, EngineError> {
        self.require(person)?;
        let map = self.indexer().ancestors_within(person, max_generations)?;
        Ok(map
            .within(max_generations)
            .map(|(handle, _)| handle.clone())
            .collect())
    }

    /// Descendants at most `max_generations` below `person`, excluding them
    pub fn descendants_within(
        &self,
        person: &PersonHandle,
        max_generations: u32,
    ) -> Result<BTreeSet<PersonHandle>, EngineError> {
        Ok(self
            .descendant_generations(person, max_generations)?
            .into_iter()
            .map(|(handle, _)| handle)
            .collect())
    }

    /// Descendants with their generation, in breadth-first order
    pub fn descendant_generations(
        &self,
        person: &PersonHandle,
        max_generations: u32,
    ) -> Result<Vec<(PersonHandle, u32)>, EngineError> {
        self.require(person)?;
        self.indexer().descendants_within(person, max_generations)
    }

    /// Everyone who shares at least one ancestral unit with `person`
    ///
    /// Lineal relatives count, since a person is in their own ancestor map.
    /// `person` itself is left out. The result follows the graph's people order.
    pub fn people_sharing_ancestor_with(
        &self,
        person: &PersonHandle,
    ) -> Result<Vec<PersonHandle>, EngineError> {
        self.require(person)?;
        let indexer = self.indexer();
        let reference = indexer.ancestors_of(person)?;

        let mut matches = Vec::new();
        for candidate in self.graph.people().map_err(EngineError::store)? {
            if &candidate.handle == person {
                continue;
            }
            let map = indexer.ancestors_of(&candidate.handle)?;
            if !finder::intersect(&reference, &map).is_empty() {
                matches.push(candidate.handle);
            }
        }

        debug!("{} people share an ancestor with {}", matches.len(), person);
        Ok(matches)
    }

    /// Whether A and B are the two parents of some family
    pub fn is_spouse(&self, a: &PersonHandle, b: &PersonHandle) -> Result<bool, EngineError> {
        SpouseRelationDetector::new(&self.graph).is_spouse(a, b)
    }

    fn indexer(&self) -> AncestorIndexer<'_, G> {
        AncestorIndexer::new(&self.graph)
            .only_birth(self.config.only_birth)
            .max_generations(self.config.max_generations)
    }

    fn require(&self, person: &PersonHandle) -> Result<(), EngineError> {
        match self.graph.get_person(person).map_err(EngineError::store)? {
            Some(_) => Ok(()),
            None => Err(EngineError::PersonNotFound(person.clone())),
        }
    }

    /// Collapsed nearest common ancestors, no spouse or in-law handling
    fn blood(
        &self,
        a: &PersonHandle,
        b: &PersonHandle,
    ) -> Result<Vec<CommonAncestorRecord>, EngineError> {
        let indexer = self.indexer();
        let map_a = indexer.ancestors_of(a)?;
        let map_b = indexer.ancestors_of(b)?;
        debug!(
            "Indexed {} ancestors for {} and {} for {}",
            map_a.len(),
            a,
            map_b.len(),
            b
        );

        let nearest = CommonAncestorFinder::new(&self.graph).find(&map_a, &map_b)?;
        PathCollapser::new(&self.graph).collapse(nearest)
    }

    /// Blood relationship through a spouse of A (B is a relative of A's
    /// spouse) or a spouse of B (B is the spouse of A's relative)
    fn in_law(
        &self,
        a: &PersonHandle,
        b: &PersonHandle,
    ) -> Result<Option<Relationship>, EngineError> {
        let detector = SpouseRelationDetector::new(&self.graph);
        let mut best: Option<(u32, InLawSide, PersonHandle, Vec<CommonAncestorRecord>)> = None;

        let mut consider =
            |side: InLawSide, spouse: PersonHandle, records: Vec<CommonAncestorRecord>| {
                let Some(rank) = records.first().map(CommonAncestorRecord::rank) else {
                    return;
                };
                if best.as_ref().is_none_or(|(best_rank, ..)| rank < *best_rank) {
                    best = Some((rank, side, spouse, records));
                }
            };

        for spouse in detector.spouses_of(a)? {
            let records = self.blood(&spouse, b)?;
            consider(InLawSide::A, spouse, records);
        }
        for spouse in detector.spouses_of(b)? {
            let records = self.blood(a, &spouse)?;
            consider(InLawSide::B, spouse, records);
        }

        Ok(best.map(|(_, side, spouse, records)| {
            debug!("{} and {} are in-laws via {} ({:?} side)", a, b, spouse, side);
            Relationship {
                descriptor: RelationshipClassifier::classify_record(&records[0])
                    .into_in_law(side),
                common_ancestors: records,
                via_spouse: Some(spouse),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{clan, h};
    use kinship_domain::{ChildRelation, CommonAncestor, Gender, RelationshipKind, UnionType};
    use kinship_store::MemoryStore;

    fn kind_of(store: &MemoryStore, a: &str, b: &str) -> RelationshipKind {
        RelationshipEngine::new(store, EngineConfig::default())
            .relationship(&h(a), &h(b))
            .unwrap()
            .descriptor
            .kind
    }

    #[test]
    fn test_blood_relationships_in_clan() {
        let store = clan();
        assert_eq!(kind_of(&store, "a", "a2"), RelationshipKind::Sibling);
        assert_eq!(
            kind_of(&store, "a", "b"),
            RelationshipKind::Cousin { degree: 1, removal: 0 }
        );
        assert_eq!(kind_of(&store, "a", "p2"), RelationshipKind::AuntUncle { removal: 0 });
        assert_eq!(kind_of(&store, "p2", "a"), RelationshipKind::NieceNephew { removal: 0 });
        assert_eq!(
            kind_of(&store, "e", "g1"),
            RelationshipKind::LinealAncestor { generations: 4 }
        );
        assert_eq!(
            kind_of(&store, "p3", "e"),
            RelationshipKind::LinealDescendant { generations: 3 }
        );
        assert_eq!(
            kind_of(&store, "a", "e"),
            RelationshipKind::Cousin { degree: 1, removal: 2 }
        );
    }

    #[test]
    fn test_same_person_and_spouse() {
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());

        let same = engine.relationship(&h("a"), &h("a")).unwrap();
        assert_eq!(same.descriptor.kind, RelationshipKind::SamePerson);
        assert!(same.common_ancestors.is_empty());

        let spouse = engine.relationship(&h("p1"), &h("s1")).unwrap();
        assert_eq!(
            spouse.descriptor.kind,
            RelationshipKind::Spouse { union: UnionType::Married }
        );
        assert!(spouse.common_ancestors.is_empty());
    }

    #[test]
    fn test_unknown_person_is_an_error() {
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());
        let err = engine.relationship(&h("a"), &h("ghost")).unwrap_err();
        assert!(matches!(err, EngineError::PersonNotFound(ref p) if p == &h("ghost")));
        assert!(engine.ancestors_within(&h("ghost"), 2).is_err());
    }

    #[test]
    fn test_in_law_through_own_spouse() {
        // g1 is s1's father-in-law: s1's spouse p1 is g1's child
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());
        let rel = engine.relationship(&h("s1"), &h("g1")).unwrap();

        assert_eq!(rel.descriptor.kind, RelationshipKind::LinealAncestor { generations: 1 });
        assert_eq!(rel.descriptor.in_law_side, Some(InLawSide::A));
        assert!(!rel.descriptor.is_step());
        assert_eq!(rel.via_spouse, Some(h("p1")));
    }

    #[test]
    fn test_in_law_through_other_spouse() {
        // s1 is p2's sister-in-law: s1 is the spouse of p2's brother p1
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());
        let rel = engine.relationship(&h("p2"), &h("s1")).unwrap();

        assert_eq!(rel.descriptor.kind, RelationshipKind::Sibling);
        assert_eq!(rel.descriptor.in_law_side, Some(InLawSide::B));
        assert_eq!(rel.via_spouse, Some(h("p1")));
    }

    #[test]
    fn test_child_in_law_is_not_step() {
        // s1 married g1's son p1
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());
        let rel = engine.relationship(&h("g1"), &h("s1")).unwrap();

        assert_eq!(rel.descriptor.kind, RelationshipKind::LinealDescendant { generations: 1 });
        assert_eq!(rel.descriptor.in_law_side, Some(InLawSide::B));
        assert!(!rel.descriptor.is_step());
    }

    #[test]
    fn test_second_wife_is_step_relation() {
        let mut store = clan();
        store.insert_person("w2", Gender::Female).unwrap();
        store.add_union("FW2", Some("p1"), Some("w2"), UnionType::Married).unwrap();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());

        // w2 is the spouse of a's father
        let stepmother = engine.relationship(&h("a"), &h("w2")).unwrap();
        assert_eq!(
            stepmother.descriptor.kind,
            RelationshipKind::LinealAncestor { generations: 1 }
        );
        assert_eq!(stepmother.descriptor.in_law_side, Some(InLawSide::B));
        assert!(stepmother.descriptor.is_step());
        assert_eq!(stepmother.via_spouse, Some(h("p1")));

        // a is the child of w2's spouse
        let stepson = engine.relationship(&h("w2"), &h("a")).unwrap();
        assert_eq!(
            stepson.descriptor.kind,
            RelationshipKind::LinealDescendant { generations: 1 }
        );
        assert_eq!(stepson.descriptor.in_law_side, Some(InLawSide::A));
        assert!(stepson.descriptor.is_step());

        // g1 is the father of w2's spouse
        let father_in_law = engine.relationship(&h("w2"), &h("g1")).unwrap();
        assert_eq!(
            father_in_law.descriptor.kind,
            RelationshipKind::LinealAncestor { generations: 1 }
        );
        assert!(!father_in_law.descriptor.is_step());
    }

    #[test]
    fn test_in_law_search_can_be_disabled() {
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::blood_only());
        let rel = engine.relationship(&h("p2"), &h("s1")).unwrap();
        assert_eq!(rel.descriptor.kind, RelationshipKind::Unrelated);
        assert!(rel.via_spouse.is_none());
    }

    #[test]
    fn test_unrelated_spouses_of_strangers() {
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());
        // s1 and s3 are linked only through two different marriages into the clan
        let rel = engine.relationship(&h("s1"), &h("s3")).unwrap();
        assert_eq!(rel.descriptor.kind, RelationshipKind::Unrelated);
        assert!(rel.common_ancestors.is_empty());
    }

    #[test]
    fn test_cousin_marriage_reports_spouse() {
        let mut store = clan();
        store.add_union("FAB", Some("a"), Some("b"), UnionType::Married).unwrap();
        assert_eq!(
            kind_of(&store, "a", "b"),
            RelationshipKind::Spouse { union: UnionType::Married }
        );
    }

    #[test]
    fn test_common_ancestors_are_collapsed() {
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());
        let records = engine.common_ancestors(&h("b"), &h("c")).unwrap();
        assert_eq!(records.len(), 1);
        assert!(matches!(records[0].ancestor, CommonAncestor::Couple { .. }));
        assert!(engine.common_ancestors(&h("b"), &h("b")).unwrap().is_empty());
    }

    #[test]
    fn test_windows() {
        let store = clan();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());

        let ancestors = engine.ancestors_within(&h("e"), 2).unwrap();
        assert_eq!(ancestors, BTreeSet::from([h("d"), h("c"), h("sc")]));

        let descendants = engine.descendants_within(&h("p3"), 2).unwrap();
        assert_eq!(descendants, BTreeSet::from([h("c"), h("d")]));
    }

    #[test]
    fn test_people_sharing_ancestor() {
        let mut store = clan();
        store.insert_person("loner", Gender::Unknown).unwrap();
        let engine = RelationshipEngine::new(&store, EngineConfig::default());

        let kin = engine.people_sharing_ancestor_with(&h("a")).unwrap();
        for relative in ["g1", "g2", "p1", "s1", "p2", "p3", "a2", "b", "c", "d", "e"] {
            assert!(kin.contains(&h(relative)), "{relative} missing");
        }
        for outsider in ["a", "s2", "s3", "sc", "loner"] {
            assert!(!kin.contains(&h(outsider)), "{outsider} included");
        }
    }

    #[test]
    fn test_birth_only_config_drops_adoptive_lines() {
        let mut store = MemoryStore::new();
        store.insert_person("parent", Gender::Female).unwrap();
        store.insert_person("adoptee", Gender::Male).unwrap();
        store.add_union("F1", None, Some("parent"), UnionType::Unknown).unwrap();
        store
            .add_child("F1", "adoptee", ChildRelation::Adopted, ChildRelation::Adopted)
            .unwrap();

        let all = RelationshipEngine::new(&store, EngineConfig::default())
            .relationship(&h("adoptee"), &h("parent"))
            .unwrap();
        assert_eq!(all.descriptor.kind, RelationshipKind::LinealAncestor { generations: 1 });
        assert!(!all.descriptor.by_birth);

        let birth = RelationshipEngine::new(&store, EngineConfig::birth_only())
            .relationship(&h("adoptee"), &h("parent"))
            .unwrap();
        assert_eq!(birth.descriptor.kind, RelationshipKind::Unrelated);
    }

    #[test]
    fn test_descriptors_per_record() {
        let store = clan();
        let rel = RelationshipEngine::new(&store, EngineConfig::default())
            .relationship(&h("p2"), &h("s1"))
            .unwrap();
        let descriptors = rel.descriptors();
        assert_eq!(descriptors.len(), 1);
        assert!(descriptors[0].in_law);
        assert_eq!(descriptors[0].in_law_side, Some(InLawSide::B));

        let unrelated = Relationship::without_ancestors(RelationshipDescriptor::unrelated());
        assert_eq!(unrelated.descriptors(), vec![RelationshipDescriptor::unrelated()]);
    }
}
