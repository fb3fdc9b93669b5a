//! Startup-loaded hero registry: canonical hero list, team-up table, and
//! counter-response table. Load once at startup, pass via Arc to handlers and
//! the engine to avoid reloading on every request. The engine treats it as
//! read-only; tests inject synthetic registries via [HeroRegistry::from_parts].

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::counters::{
    load_counter_responses, CounterResponses, DEFAULT_COUNTER_RESPONSES_PATH,
};
use crate::data::hero::{load_canonical_heroes, Hero, DEFAULT_CANONICAL_HEROES_PATH};
use crate::data::teamup::{load_team_ups, TeamUp, DEFAULT_TEAM_UPS_PATH};

#[derive(Debug, Clone)]
pub struct HeroRegistry {
    /// All heroes in canonical order. Canonical order is the recommendation
    /// tie-break order and the local-search candidate scan order.
    heroes: Vec<Hero>,
    /// Hero id -> index into `heroes`.
    by_id: HashMap<String, usize>,
    /// Team-up relations in table order.
    team_ups: Vec<TeamUp>,
    counter_responses: CounterResponses,
}

impl HeroRegistry {
    /// Build a registry from already-loaded tables. This is the injection
    /// seam: the host loads the curated datasets, tests pass synthetic ones.
    pub fn from_parts(
        heroes: Vec<Hero>,
        team_ups: Vec<TeamUp>,
        counter_responses: CounterResponses,
    ) -> Self {
        let by_id = heroes
            .iter()
            .enumerate()
            .map(|(index, hero)| (hero.id.clone(), index))
            .collect();
        HeroRegistry {
            heroes,
            by_id,
            team_ups,
            counter_responses,
        }
    }

    /// Load all static data from disk. Returns an Arc so it can be shared
    /// across handlers and threads. Hero load failure returns Err; missing
    /// team-up or counter tables are allowed and default to empty.
    pub fn load() -> Result<Arc<HeroRegistry>, std::io::Error> {
        let heroes = load_canonical_heroes(DEFAULT_CANONICAL_HEROES_PATH)?;
        let team_ups = load_team_ups(DEFAULT_TEAM_UPS_PATH).unwrap_or_default();
        let counter_responses =
            load_counter_responses(DEFAULT_COUNTER_RESPONSES_PATH).unwrap_or_default();
        Ok(Arc::new(HeroRegistry::from_parts(
            heroes,
            team_ups,
            counter_responses,
        )))
    }

    /// Heroes in canonical order, for API listing and candidate scans.
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Look up a hero by id. Unknown ids resolve to None; the engine treats
    /// them as contributing no role and no tags.
    pub fn hero(&self, id: &str) -> Option<&Hero> {
        self.by_id.get(id).map(|&index| &self.heroes[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn team_ups(&self) -> &[TeamUp] {
        &self.team_ups
    }

    pub fn counter_responses(&self) -> &CounterResponses {
        &self.counter_responses
    }
}
