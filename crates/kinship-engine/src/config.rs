//! Configuration for relationship queries

use serde::{Deserialize, Serialize};

/// Configuration for the relationship engine
///
/// # Examples
///
/// ```
/// use kinship_engine::EngineConfig;
///
/// // Default: unbounded, follows every parent link, searches in-laws
/// let config = EngineConfig::default();
/// assert!(config.max_generations.is_none());
/// assert!(config.search_in_law);
///
/// // Biological lines only
/// let config = EngineConfig::birth_only();
/// assert!(config.only_birth);
///
/// // No in-law fallback
/// let config = EngineConfig::blood_only();
/// assert!(!config.search_in_law);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cap on how many generations the ancestor index climbs
    /// Default: unbounded (the visited set still guarantees termination)
    #[serde(default)]
    pub max_generations: Option<u32>,

    /// Follow only birth parent links; adoptive and step links are ignored
    /// Default: false
    #[serde(default)]
    pub only_birth: bool,

    /// When no blood relationship exists, look for one through either
    /// person's spouses and report it as in-law
    /// Default: true
    #[serde(default = "default_search_in_law")]
    pub search_in_law: bool,
}

fn default_search_in_law() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_generations: None,
            only_birth: false,
            search_in_law: true,
        }
    }
}

impl EngineConfig {
    /// Follow birth links only
    pub fn birth_only() -> Self {
        Self {
            only_birth: true,
            ..Self::default()
        }
    }

    /// Blood relationships only, no in-law search
    pub fn blood_only() -> Self {
        Self {
            search_in_law: false,
            ..Self::default()
        }
    }

    /// Same configuration with a generation cap
    pub fn with_max_generations(self, max_generations: u32) -> Self {
        Self {
            max_generations: Some(max_generations),
            ..self
        }
    }
}
