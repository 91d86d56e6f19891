//! Kinship Storage Layer
//!
//! Implements the [`GraphAccessor`](kinship_domain::GraphAccessor) trait over
//! an in-memory record set.
//!
//! # Architecture
//!
//! - `MemoryStore` holds people and families keyed by handle, in insertion order
//! - The builder methods keep both ends of every link in sync: adding a child to
//!   a family also records the parent-family link on the child, and adding a
//!   union records the family on both parents
//! - Family-tree documents (JSON or TOML) are normalized the same way on load
//!
//! # Examples
//!
//! ```
//! use kinship_domain::{Gender, GraphAccessor, PersonHandle, UnionType};
//! use kinship_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.insert_person("dad", Gender::Male).unwrap();
//! store.insert_person("mum", Gender::Female).unwrap();
//! store.insert_person("kid", Gender::Unknown).unwrap();
//! store.add_union("F1", Some("dad"), Some("mum"), UnionType::Married).unwrap();
//! store.add_birth_child("F1", "kid").unwrap();
//!
//! let kid = store.get_person(&PersonHandle::from("kid")).unwrap().unwrap();
//! assert_eq!(kid.parent_families.len(), 1);
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod memory;

pub use document::{DocumentFormat, FamilyTreeDocument};
pub use error::StoreError;
pub use memory::MemoryStore;
