//! Ancestor and descendant indexing
//!
//! Breadth-first traversal over parent-family links. The map being built is
//! also the visited set: each person is expanded at most once, at its minimal
//! generation, so fan-in (pedigree collapse) and corrupted self-referential
//! records both terminate.

use crate::EngineError;
use kinship_domain::{
    AncestorEntry, AncestorMap, Family, FamilyHandle, GraphAccessor, Person, PersonHandle,
};
use std::collections::{HashSet, VecDeque};
use std::fmt::Display;
use tracing::{debug, trace, warn};

/// Builds [`AncestorMap`]s and descendant listings for one query
pub struct AncestorIndexer<'g, G> {
    graph: &'g G,
    only_birth: bool,
    max_generations: Option<u32>,
}

impl<'g, G> AncestorIndexer<'g, G>
where
    G: GraphAccessor,
    G::Error: Display,
{
    /// Create an indexer that follows every parent link without a depth cap
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            only_birth: false,
            max_generations: None,
        }
    }

    /// Ignore adoptive and step parent links
    pub fn only_birth(mut self, only_birth: bool) -> Self {
        self.only_birth = only_birth;
        self
    }

    /// Stop expanding at `max_generations` above the root
    pub fn max_generations(mut self, max_generations: Option<u32>) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Every reachable ancestor of `root` with its minimal generation
    ///
    /// A root that does not resolve yields a map holding only the root.
    pub fn ancestors_of(&self, root: &PersonHandle) -> Result<AncestorMap, EngineError> {
        self.index(root, self.max_generations)
    }

    /// Ancestors of `root` at most `max_generations` above it, root excluded
    pub fn ancestors_within(
        &self,
        root: &PersonHandle,
        max_generations: u32,
    ) -> Result<AncestorMap, EngineError> {
        let limit = match self.max_generations {
            Some(cap) => cap.min(max_generations),
            None => max_generations,
        };
        self.index(root, Some(limit))
    }

    fn index(&self, root: &PersonHandle, limit: Option<u32>) -> Result<AncestorMap, EngineError> {
        let mut map = AncestorMap::new(root.clone());
        let mut queue: VecDeque<Person> = VecDeque::new();

        if let Some(person) = self.lookup(root)? {
            queue.push_back(person);
        }

        while let Some(person) = queue.pop_front() {
            // Read at pop time: every same-generation upgrade has landed by now
            let Some(&AncestorEntry { generation, by_birth }) = map.get(&person.handle) else {
                continue;
            };
            if limit.is_some_and(|max| generation >= max) {
                continue;
            }
            let next = generation + 1;

            for link in &person.parent_families {
                let Some(family) = self.family(&link.family)? else {
                    trace!("Parent family {} of {} does not resolve", link.family, person.handle);
                    continue;
                };

                let mut resolved = 0;
                let sides = [
                    (&family.father, link.father_relation),
                    (&family.mother, link.mother_relation),
                ];
                for (parent, relation) in sides {
                    let Some(parent) = parent else { continue };

                    if parent == &person.handle {
                        warn!(
                            "{} is recorded as their own parent in family {}",
                            parent, family.handle
                        );
                        resolved += 1;
                        continue;
                    }
                    if map.contains(parent) {
                        // fan-in or cycle: never re-expanded, at most flagged by-birth
                        resolved += 1;
                        if !self.only_birth || relation.is_birth() {
                            map.record(parent, next, by_birth && relation.is_birth());
                        }
                        trace!("Already indexed {}", parent);
                        continue;
                    }

                    let Some(parent_record) = self.lookup(parent)? else {
                        trace!("Parent {} in family {} does not resolve", parent, family.handle);
                        continue;
                    };
                    resolved += 1;
                    if self.only_birth && !relation.is_birth() {
                        continue;
                    }
                    map.record(parent, next, by_birth && relation.is_birth());
                    queue.push_back(parent_record);
                }

                if resolved == 0 {
                    let link_birth =
                        link.mother_relation.is_birth() && link.father_relation.is_birth();
                    if !self.only_birth || link_birth {
                        map.record_parentless(&family.handle, next, by_birth && link_birth);
                    }
                }
            }
        }

        debug!(
            "Indexed {} ancestors of {} ({} generations, {} parentless families)",
            map.len() - 1,
            root,
            map.depth(),
            map.family_markers().len()
        );
        Ok(map)
    }

    /// Descendants of `root` at most `max_generations` below it, in
    /// breadth-first order, each with its minimal generation
    pub fn descendants_within(
        &self,
        root: &PersonHandle,
        max_generations: u32,
    ) -> Result<Vec<(PersonHandle, u32)>, EngineError> {
        let mut visited: HashSet<PersonHandle> = HashSet::new();
        let mut found: Vec<(PersonHandle, u32)> = Vec::new();
        let mut queue: VecDeque<(Person, u32)> = VecDeque::new();

        visited.insert(root.clone());
        if let Some(person) = self.lookup(root)? {
            queue.push_back((person, 0));
        }

        while let Some((person, generation)) = queue.pop_front() {
            if generation >= max_generations {
                continue;
            }

            for family_handle in &person.families {
                let Some(family) = self.family(family_handle)? else {
                    continue;
                };
                for child in &family.children {
                    if visited.contains(child) {
                        continue;
                    }
                    let Some(child_record) = self.lookup(child)? else {
                        continue;
                    };
                    if self.only_birth
                        && !self.is_birth_child(&child_record, &family, &person.handle)
                    {
                        continue;
                    }
                    visited.insert(child.clone());
                    found.push((child.clone(), generation + 1));
                    queue.push_back((child_record, generation + 1));
                }
            }
        }

        debug!(
            "Found {} descendants of {} within {} generations",
            found.len(),
            root,
            max_generations
        );
        Ok(found)
    }

    fn is_birth_child(&self, child: &Person, family: &Family, parent: &PersonHandle) -> bool {
        let Some(link) = child.parent_families.iter().find(|l| l.family == family.handle) else {
            return true;
        };
        if family.father.as_ref() == Some(parent) {
            link.father_relation.is_birth()
        } else if family.mother.as_ref() == Some(parent) {
            link.mother_relation.is_birth()
        } else {
            true
        }
    }

    fn lookup(&self, handle: &PersonHandle) -> Result<Option<Person>, EngineError> {
        self.graph.get_person(handle).map_err(EngineError::store)
    }

    fn family(&self, handle: &FamilyHandle) -> Result<Option<Family>, EngineError> {
        self.graph.get_family(handle).map_err(EngineError::store)
    }
}
