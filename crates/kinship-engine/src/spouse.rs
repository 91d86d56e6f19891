//! Direct spousal unions

use crate::EngineError;
use kinship_domain::{FamilyHandle, GraphAccessor, PersonHandle, UnionType};
use std::fmt::Display;

/// Detects whether two people are parents together in some family
pub struct SpouseRelationDetector<'g, G> {
    graph: &'g G,
}

impl<'g, G> SpouseRelationDetector<'g, G>
where
    G: GraphAccessor,
    G::Error: Display,
{
    /// Create a detector over `graph`
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Whether `a` and `b` are the two parents of any family
    pub fn is_spouse(&self, a: &PersonHandle, b: &PersonHandle) -> Result<bool, EngineError> {
        Ok(self.union_between(a, b)?.is_some())
    }

    /// Union type of the first family in which `a` and `b` are the two parents
    ///
    /// Both people's own-family lists are searched, so a link recorded on
    /// only one side is still found.
    pub fn union_between(
        &self,
        a: &PersonHandle,
        b: &PersonHandle,
    ) -> Result<Option<UnionType>, EngineError> {
        if a == b {
            return Ok(None);
        }

        for (person, other) in [(a, b), (b, a)] {
            for family in self.own_families(person)? {
                let Some(record) = self
                    .graph
                    .get_family(&family)
                    .map_err(EngineError::store)?
                else {
                    continue;
                };
                if record.is_couple(person, other) {
                    return Ok(Some(record.union_type));
                }
            }
        }
        Ok(None)
    }

    /// Every partner of `person`, in own-family order, without repeats
    pub fn spouses_of(&self, person: &PersonHandle) -> Result<Vec<PersonHandle>, EngineError> {
        let mut spouses: Vec<PersonHandle> = Vec::new();
        for family in self.own_families(person)? {
            let Some(record) = self.graph.get_family(&family).map_err(EngineError::store)? else {
                continue;
            };
            if let Some(partner) = record.partner_of(person) {
                if partner != person && !spouses.contains(partner) {
                    spouses.push(partner.clone());
                }
            }
        }
        Ok(spouses)
    }

    fn own_families(&self, person: &PersonHandle) -> Result<Vec<FamilyHandle>, EngineError> {
        Ok(self
            .graph
            .get_person(person)
            .map_err(EngineError::store)?
            .map(|p| p.families)
            .unwrap_or_default())
    }
}
