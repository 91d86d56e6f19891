//! Ancestry module - per-query ancestor indexes and common-ancestor records

use crate::{FamilyHandle, PersonHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimal generation distance from the root of an [`AncestorMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorEntry {
    /// Generations above the root (0 = the root itself)
    pub generation: u32,

    /// Whether some minimal-length route to this ancestor uses only birth links
    pub by_birth: bool,
}

/// A parent family reached during indexing that has no resolvable parents
///
/// The marker stands in for the missing parents so that two children of the
/// same parentless family still share a common ancestral unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMarker {
    /// The parentless family
    pub family: FamilyHandle,

    /// Generation the missing parents would occupy
    pub generation: u32,

    /// Whether the child link into this family is a birth link on the route
    pub by_birth: bool,
}

/// Outcome of recording an identifier in an [`AncestorMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// First time seen; the caller should expand it
    New,

    /// Already present at the same generation, now flagged by-birth
    Upgraded,

    /// Already present; nothing changed
    Seen,
}

/// Mapping from every reachable ancestor to its minimal generation distance
///
/// Built fresh per query. Entries keep discovery order so that results
/// derived from the map are deterministic. The key set doubles as the
/// visited set of the traversal that built it.
#[derive(Debug, Clone)]
pub struct AncestorMap {
    root: PersonHandle,
    order: Vec<PersonHandle>,
    entries: HashMap<PersonHandle, AncestorEntry>,
    markers: Vec<FamilyMarker>,
    marker_index: HashMap<FamilyHandle, usize>,
}

impl AncestorMap {
    /// Create a map containing only `root` at generation 0
    pub fn new(root: PersonHandle) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            root.clone(),
            AncestorEntry {
                generation: 0,
                by_birth: true,
            },
        );

        Self {
            order: vec![root.clone()],
            root,
            entries,
            markers: Vec::new(),
            marker_index: HashMap::new(),
        }
    }

    /// The person this map was built for
    pub fn root(&self) -> &PersonHandle {
        &self.root
    }

    /// Record `handle` at `generation`
    ///
    /// A handle already present is never moved to a different generation.
    /// When it is seen again at the same generation over a birth route, its
    /// `by_birth` flag is raised.
    pub fn record(&mut self, handle: &PersonHandle, generation: u32, by_birth: bool) -> Visit {
        match self.entries.get_mut(handle) {
            None => {
                self.entries
                    .insert(handle.clone(), AncestorEntry { generation, by_birth });
                self.order.push(handle.clone());
                Visit::New
            }
            Some(entry) if entry.generation == generation && by_birth && !entry.by_birth => {
                entry.by_birth = true;
                Visit::Upgraded
            }
            Some(_) => Visit::Seen,
        }
    }

    /// Record a parent family that has no resolvable parents
    pub fn record_parentless(
        &mut self,
        family: &FamilyHandle,
        generation: u32,
        by_birth: bool,
    ) -> Visit {
        match self.marker_index.get(family) {
            None => {
                self.marker_index.insert(family.clone(), self.markers.len());
                self.markers.push(FamilyMarker {
                    family: family.clone(),
                    generation,
                    by_birth,
                });
                Visit::New
            }
            Some(&idx) => {
                let marker = &mut self.markers[idx];
                if marker.generation == generation && by_birth && !marker.by_birth {
                    marker.by_birth = true;
                    Visit::Upgraded
                } else {
                    Visit::Seen
                }
            }
        }
    }

    /// Look up an ancestor
    pub fn get(&self, handle: &PersonHandle) -> Option<&AncestorEntry> {
        self.entries.get(handle)
    }

    /// Whether `handle` is the root or one of its ancestors
    pub fn contains(&self, handle: &PersonHandle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Look up a parentless-family marker
    pub fn family_marker(&self, family: &FamilyHandle) -> Option<&FamilyMarker> {
        self.marker_index.get(family).map(|&idx| &self.markers[idx])
    }

    /// All parentless-family markers in discovery order
    pub fn family_markers(&self) -> &[FamilyMarker] {
        &self.markers
    }

    /// Every entry (root included) in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&PersonHandle, &AncestorEntry)> {
        self.order.iter().map(move |h| (h, &self.entries[h]))
    }

    /// Ancestors (root excluded) at most `max_generations` above the root
    pub fn within(
        &self,
        max_generations: u32,
    ) -> impl Iterator<Item = (&PersonHandle, &AncestorEntry)> {
        self.iter()
            .filter(move |(_, e)| e.generation > 0 && e.generation <= max_generations)
    }

    /// Number of entries, root included
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false; the root is always present
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Deepest generation reached
    pub fn depth(&self) -> u32 {
        self.entries.values().map(|e| e.generation).max().unwrap_or(0)
    }
}

/// The shared ancestral unit of a [`CommonAncestorRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommonAncestor {
    /// A single shared ancestor
    Person {
        /// The ancestor
        handle: PersonHandle,
    },

    /// Both parents of one family, reported once
    Couple {
        /// The family the two ancestors are parents in
        family: FamilyHandle,
        /// The family's father
        father: PersonHandle,
        /// The family's mother
        mother: PersonHandle,
    },

    /// A shared parent family whose parents are not recorded
    ParentlessFamily {
        /// The family
        family: FamilyHandle,
    },
}

impl CommonAncestor {
    /// Single-person ancestor
    pub fn person(handle: PersonHandle) -> Self {
        CommonAncestor::Person { handle }
    }

    /// Person handles making up this unit (empty for a parentless family)
    pub fn handles(&self) -> Vec<&PersonHandle> {
        match self {
            CommonAncestor::Person { handle } => vec![handle],
            CommonAncestor::Couple { father, mother, .. } => vec![father, mother],
            CommonAncestor::ParentlessFamily { .. } => Vec::new(),
        }
    }
}

/// One shared ancestral unit plus the generation distance from each side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommonAncestorRecord {
    /// The shared ancestor, couple or parentless family
    pub ancestor: CommonAncestor,

    /// Generations from A up to the ancestor
    pub dist_a: u32,

    /// Generations from B up to the ancestor
    pub dist_b: u32,

    /// Whether A's route to the ancestor uses only birth links
    pub by_birth_a: bool,

    /// Whether B's route to the ancestor uses only birth links
    pub by_birth_b: bool,
}

impl CommonAncestorRecord {
    /// Combined rank used to pick the nearest common ancestors
    pub fn rank(&self) -> u32 {
        self.dist_a + self.dist_b
    }

    /// Whether both routes are birth routes
    pub fn by_birth(&self) -> bool {
        self.by_birth_a && self.by_birth_b
    }

    /// The same record seen from B's side
    pub fn swapped(&self) -> Self {
        Self {
            ancestor: self.ancestor.clone(),
            dist_a: self.dist_b,
            dist_b: self.dist_a,
            by_birth_a: self.by_birth_b,
            by_birth_b: self.by_birth_a,
        }
    }
}
