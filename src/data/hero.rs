use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CANONICAL_HEROES_PATH: &str = "data/heroes/heroes.canonical.json";

/// Combat archetype. Every hero has exactly one; the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Vanguard,
    Duelist,
    Strategist,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Vanguard, Role::Duelist, Role::Strategist];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vanguard => "vanguard",
            Self::Duelist => "duelist",
            Self::Strategist => "strategist",
        }
    }

    /// Parse a role name case-insensitively. Used by the `role=` API filter.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vanguard" => Some(Self::Vanguard),
            "duelist" => Some(Self::Duelist),
            "strategist" => Some(Self::Strategist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Capability tags; also the vocabulary of the counter-response table.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CanonicalHeroesFile {
    heroes: Vec<Hero>,
}

/// Load the canonical hero list in file order. File order is the registry's
/// canonical ordering and drives recommendation tie-breaks.
pub fn load_canonical_heroes(path: impl AsRef<Path>) -> Result<Vec<Hero>, std::io::Error> {
    let raw = fs::read_to_string(path)?;
    let parsed: CanonicalHeroesFile = serde_json::from_str(&raw).map_err(std::io::Error::other)?;
    Ok(parsed.heroes)
}
