//! Couple collapsing for common-ancestor records
//!
//! Two full siblings reach both of their parents at the same distances. The
//! parents are one ancestral unit, so their two records become one couple
//! record instead of reporting the siblings as "doubly related".

use crate::EngineError;
use kinship_domain::{CommonAncestor, CommonAncestorRecord, GraphAccessor, PersonHandle};
use std::fmt::Display;

/// Merges person records that are the two parents of one family
pub struct PathCollapser<'g, G> {
    graph: &'g G,
}

impl<'g, G> PathCollapser<'g, G>
where
    G: GraphAccessor,
    G::Error: Display,
{
    /// Create a collapser over `graph`
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Collapse couples and drop duplicates
    ///
    /// Output keeps the input order of first occurrence; a couple takes the
    /// position of whichever parent came first. Running `collapse` on its own
    /// output returns it unchanged.
    pub fn collapse(
        &self,
        records: Vec<CommonAncestorRecord>,
    ) -> Result<Vec<CommonAncestorRecord>, EngineError> {
        let mut consumed = vec![false; records.len()];
        let mut out: Vec<CommonAncestorRecord> = Vec::with_capacity(records.len());

        for i in 0..records.len() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;
            let record = &records[i];

            if out.iter().any(|kept| covers(kept, record)) {
                continue;
            }

            let CommonAncestor::Person { handle } = &record.ancestor else {
                out.push(record.clone());
                continue;
            };

            let mut merged = None;
            for j in (i + 1)..records.len() {
                if consumed[j] || !same_distances(record, &records[j]) {
                    continue;
                }
                let CommonAncestor::Person { handle: other } = &records[j].ancestor else {
                    continue;
                };
                if let Some(couple) = self.couple_of(handle, other)? {
                    consumed[j] = true;
                    merged = Some(merge_couple(couple, record, &records[j]));
                    break;
                }
            }
            out.push(merged.unwrap_or_else(|| record.clone()));
        }

        Ok(out)
    }

    /// The couple formed by `a` and `b`, if they are the two parents of a family
    pub fn couple_of(
        &self,
        a: &PersonHandle,
        b: &PersonHandle,
    ) -> Result<Option<CommonAncestor>, EngineError> {
        if a == b {
            return Ok(None);
        }
        for person in [a, b] {
            let Some(record) = self.graph.get_person(person).map_err(EngineError::store)? else {
                continue;
            };
            for handle in &record.families {
                let Some(family) = self.graph.get_family(handle).map_err(EngineError::store)? else {
                    continue;
                };
                if !family.is_couple(a, b) {
                    continue;
                }
                if let (Some(father), Some(mother)) = (family.father, family.mother) {
                    return Ok(Some(CommonAncestor::Couple {
                        family: family.handle,
                        father,
                        mother,
                    }));
                }
            }
        }
        Ok(None)
    }
}

/// Build the couple record for two parent records sharing `couple`
pub(crate) fn merge_couple(
    couple: CommonAncestor,
    first: &CommonAncestorRecord,
    second: &CommonAncestorRecord,
) -> CommonAncestorRecord {
    CommonAncestorRecord {
        ancestor: couple,
        dist_a: first.dist_a,
        dist_b: first.dist_b,
        by_birth_a: first.by_birth_a || second.by_birth_a,
        by_birth_b: first.by_birth_b || second.by_birth_b,
    }
}

fn same_distances(a: &CommonAncestorRecord, b: &CommonAncestorRecord) -> bool {
    a.dist_a == b.dist_a && a.dist_b == b.dist_b
}

/// Whether `kept` already accounts for `record`
fn covers(kept: &CommonAncestorRecord, record: &CommonAncestorRecord) -> bool {
    if kept.ancestor == record.ancestor {
        return true;
    }
    match (&kept.ancestor, &record.ancestor) {
        (CommonAncestor::Couple { father, mother, .. }, CommonAncestor::Person { handle }) => {
            (handle == father || handle == mother) && same_distances(kept, record)
        }
        _ => false,
    }
}
