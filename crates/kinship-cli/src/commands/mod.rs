//! Command implementations.

pub mod ancestors;
pub mod common;
pub mod descendants;
pub mod kin;
pub mod relate;

pub use self::ancestors::execute_ancestors;
pub use self::common::execute_common;
pub use self::descendants::execute_descendants;
pub use self::kin::execute_kin;
pub use self::relate::execute_relate;

use crate::cli::Command;
use crate::error::Result;
use crate::output::{Formatter, PersonRow};
use kinship_domain::{CommonAncestor, Person, PersonHandle, RelationshipFormatter};
use kinship_engine::{EngineConfig, EngineError, RelationshipEngine};
use kinship_store::MemoryStore;

/// Everything a command needs: the loaded tree, engine options and output.
pub struct Context {
    store: MemoryStore,
    config: EngineConfig,
    formatter: Formatter,
    phrases: Box<dyn RelationshipFormatter>,
}

impl Context {
    /// Create a command context.
    pub fn new(
        store: MemoryStore,
        config: EngineConfig,
        formatter: Formatter,
        phrases: Box<dyn RelationshipFormatter>,
    ) -> Self {
        Self {
            store,
            config,
            formatter,
            phrases,
        }
    }

    /// A relationship engine over the loaded tree.
    pub fn engine(&self) -> RelationshipEngine<&MemoryStore> {
        RelationshipEngine::new(&self.store, self.config.clone())
    }

    /// Output formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Phrase table for the configured locale.
    pub fn phrases(&self) -> &dyn RelationshipFormatter {
        self.phrases.as_ref()
    }

    pub(crate) fn person(&self, handle: &PersonHandle) -> Result<&Person> {
        self.store
            .person(handle)
            .ok_or_else(|| EngineError::PersonNotFound(handle.clone()).into())
    }

    pub(crate) fn row(&self, handle: &PersonHandle, generation: Option<u32>) -> PersonRow {
        PersonRow {
            handle: handle.clone(),
            name: self.name(handle),
            generation,
        }
    }

    pub(crate) fn ancestor_label(&self, ancestor: &CommonAncestor) -> String {
        match ancestor {
            CommonAncestor::Person { handle } => format!("{} ({})", self.name(handle), handle),
            CommonAncestor::Couple {
                family,
                father,
                mother,
            } => format!("{} & {} ({})", self.name(father), self.name(mother), family),
            CommonAncestor::ParentlessFamily { family } => {
                format!("unrecorded parents ({})", family)
            }
        }
    }

    fn name(&self, handle: &PersonHandle) -> String {
        self.store
            .person(handle)
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| handle.to_string())
    }
}

/// Run `command` and return its rendered output.
pub fn execute(command: Command, ctx: &Context) -> Result<String> {
    match command {
        Command::Relate(args) => execute_relate(args, ctx),
        Command::Common(args) => execute_common(args, ctx),
        Command::Ancestors(args) => execute_ancestors(args, ctx),
        Command::Descendants(args) => execute_descendants(args, ctx),
        Command::Kin(args) => execute_kin(args, ctx),
    }
}
