//! Shared fixture trees for unit tests

use kinship_domain::{Gender, PersonHandle, UnionType};
use kinship_store::MemoryStore;

pub(crate) type FamilySpec<'a> = (&'a str, Option<&'a str>, Option<&'a str>, &'a [&'a str]);

/// Build a store from people and (family, father, mother, birth children) tuples
pub(crate) fn tree(people: &[(&str, Gender)], families: &[FamilySpec<'_>]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (handle, gender) in people {
        store.insert_person(handle, *gender).unwrap();
    }
    for (family, father, mother, children) in families {
        store
            .add_union(family, *father, *mother, UnionType::Married)
            .unwrap();
        for child in children.iter() {
            store.add_birth_child(family, child).unwrap();
        }
    }
    store
}

/// Four generations below grandparents g1 + g2.
///
/// ```text
/// g1 + g2
/// ├── p1 + s1 ── a, a2
/// ├── p2 + s2 ── b
/// └── p3 + s3 ── c + sc ── d ── e
/// ```
pub(crate) fn clan() -> MemoryStore {
    use Gender::*;
    tree(
        &[
            ("g1", Male),
            ("g2", Female),
            ("p1", Male),
            ("s1", Female),
            ("p2", Female),
            ("s2", Male),
            ("p3", Male),
            ("s3", Female),
            ("a", Male),
            ("a2", Female),
            ("b", Female),
            ("c", Male),
            ("sc", Female),
            ("d", Male),
            ("e", Female),
        ],
        &[
            ("FG", Some("g1"), Some("g2"), &["p1", "p2", "p3"]),
            ("FP1", Some("p1"), Some("s1"), &["a", "a2"]),
            ("FP2", Some("s2"), Some("p2"), &["b"]),
            ("FP3", Some("p3"), Some("s3"), &["c"]),
            ("FC", Some("c"), Some("sc"), &["d"]),
            ("FD", Some("d"), None, &["e"]),
        ],
    )
}

pub(crate) fn h(handle: &str) -> PersonHandle {
    PersonHandle::from(handle)
}
