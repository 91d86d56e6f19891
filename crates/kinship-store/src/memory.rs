//! In-memory record store

use crate::StoreError;
use kinship_domain::{
    ChildRelation, Family, FamilyHandle, Gender, GraphAccessor, ParentFamilyLink, Person,
    PersonHandle, UnionType,
};
use std::collections::HashMap;
use std::convert::Infallible;

/// In-memory implementation of [`GraphAccessor`]
///
/// Lookups never fail; unknown handles resolve to `None`. Records are handed
/// out as clones, matching what a persistent store would return.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    people: HashMap<PersonHandle, Person>,
    person_order: Vec<PersonHandle>,
    families: HashMap<FamilyHandle, Family>,
    family_order: Vec<FamilyHandle>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person record as-is
    ///
    /// Links are not reconciled; call [`MemoryStore::normalize`] after a bulk
    /// insert if the records may be one-sided.
    pub fn add_person(&mut self, person: Person) -> Result<(), StoreError> {
        if self.people.contains_key(&person.handle) {
            return Err(StoreError::DuplicatePerson(person.handle));
        }
        self.person_order.push(person.handle.clone());
        self.people.insert(person.handle.clone(), person);
        Ok(())
    }

    /// Insert a family record as-is
    pub fn add_family(&mut self, family: Family) -> Result<(), StoreError> {
        if self.families.contains_key(&family.handle) {
            return Err(StoreError::DuplicateFamily(family.handle));
        }
        self.family_order.push(family.handle.clone());
        self.families.insert(family.handle.clone(), family);
        Ok(())
    }

    /// Insert a bare person with no links
    pub fn insert_person(
        &mut self,
        handle: &str,
        gender: Gender,
    ) -> Result<PersonHandle, StoreError> {
        let handle = PersonHandle::from(handle);
        self.add_person(Person::new(handle.clone(), gender))?;
        Ok(handle)
    }

    /// Create a family with the given parents and record it on each parent
    pub fn add_union(
        &mut self,
        family: &str,
        father: Option<&str>,
        mother: Option<&str>,
        union_type: UnionType,
    ) -> Result<FamilyHandle, StoreError> {
        let handle = FamilyHandle::from(family);
        let father = father.map(PersonHandle::from);
        let mother = mother.map(PersonHandle::from);

        for parent in father.iter().chain(mother.iter()) {
            if !self.people.contains_key(parent) {
                return Err(StoreError::UnknownPerson(parent.clone()));
            }
        }

        self.add_family(Family {
            father: father.clone(),
            mother: mother.clone(),
            union_type,
            ..Family::new(handle.clone())
        })?;

        for parent in father.iter().chain(mother.iter()) {
            if let Some(person) = self.people.get_mut(parent) {
                if !person.families.contains(&handle) {
                    person.families.push(handle.clone());
                }
            }
        }

        Ok(handle)
    }

    /// Add `child` to `family` with explicit relation tags
    pub fn add_child(
        &mut self,
        family: &str,
        child: &str,
        mother_relation: ChildRelation,
        father_relation: ChildRelation,
    ) -> Result<(), StoreError> {
        let family = FamilyHandle::from(family);
        let child = PersonHandle::from(child);

        let record = self
            .families
            .get_mut(&family)
            .ok_or_else(|| StoreError::UnknownFamily(family.clone()))?;
        let person = self
            .people
            .get_mut(&child)
            .ok_or_else(|| StoreError::UnknownPerson(child.clone()))?;

        if !record.children.contains(&child) {
            record.children.push(child.clone());
        }
        match person.parent_families.iter_mut().find(|l| l.family == family) {
            Some(link) => {
                link.mother_relation = mother_relation;
                link.father_relation = father_relation;
            }
            None => person.parent_families.push(ParentFamilyLink::new(
                family,
                mother_relation,
                father_relation,
            )),
        }
        Ok(())
    }

    /// Add `child` to `family` as the birth child of both parents
    pub fn add_birth_child(&mut self, family: &str, child: &str) -> Result<(), StoreError> {
        self.add_child(family, child, ChildRelation::Birth, ChildRelation::Birth)
    }

    /// Reconcile one-sided links; returns the number of links added
    ///
    /// - a family's parent gains the family in their own-family list
    /// - a family's child gains a birth parent-family link
    /// - a person's parent-family link adds them to the family's child list
    ///
    /// Links to handles that do not exist are left alone; traversal treats
    /// them as absent.
    pub fn normalize(&mut self) -> usize {
        let mut repaired = 0;

        for handle in &self.family_order {
            let family = &self.families[handle];
            for parent in family.parents() {
                if let Some(person) = self.people.get_mut(parent) {
                    if !person.families.contains(handle) {
                        person.families.push(handle.clone());
                        repaired += 1;
                    }
                }
            }
            for child in &family.children {
                if let Some(person) = self.people.get_mut(child) {
                    if !person.parent_families.iter().any(|l| &l.family == handle) {
                        person
                            .parent_families
                            .push(ParentFamilyLink::birth(handle.clone()));
                        repaired += 1;
                    }
                }
            }
        }

        for handle in &self.person_order {
            let person = &self.people[handle];
            for link in &person.parent_families {
                if let Some(family) = self.families.get_mut(&link.family) {
                    if !family.children.contains(handle) {
                        family.children.push(handle.clone());
                        repaired += 1;
                    }
                }
            }
        }

        repaired
    }

    /// Number of people
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of families
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Families in insertion order
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.family_order.iter().map(move |h| &self.families[h])
    }

    /// Borrow a person without cloning
    pub fn person(&self, handle: &PersonHandle) -> Option<&Person> {
        self.people.get(handle)
    }
}

impl GraphAccessor for MemoryStore {
    type Error = Infallible;

    fn get_person(&self, handle: &PersonHandle) -> Result<Option<Person>, Self::Error> {
        Ok(self.people.get(handle).cloned())
    }

    fn get_family(&self, handle: &FamilyHandle) -> Result<Option<Family>, Self::Error> {
        Ok(self.families.get(handle).cloned())
    }

    fn people(&self) -> Result<Vec<Person>, Self::Error> {
        Ok(self
            .person_order
            .iter()
            .map(|h| self.people[h].clone())
            .collect())
    }
}
