//! Full-roster composition: greedy fill from high-impact team-ups, then a
//! bounded hill-climbing local search over single-slot swaps.

use serde::Serialize;

use crate::data::data_registry::HeroRegistry;
use crate::data::teamup::TeamUp;
use crate::engine::evaluator::{evaluate, Evaluation};

pub const TEAM_SIZE: usize = 6;
/// Relations at or above this weight drive the greedy fill passes.
pub const HIGH_IMPACT_SCORE: u32 = 7;
/// Outer-iteration cap for the local search. Worst case is
/// `MAX_SEARCH_ITERATIONS * TEAM_SIZE * |registry|` evaluations.
pub const MAX_SEARCH_ITERATIONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedTeam {
    /// Exactly TEAM_SIZE slots; None marks a slot the search could not fill
    /// (only possible with a registry smaller than the team).
    pub roster: Vec<Option<String>>,
    pub evaluation: Evaluation,
}

/// Propose a full roster maximizing the synergy score, starting from
/// `partial` (padded or truncated to TEAM_SIZE slots).
///
/// Strict-improvement hill climbing with no restarts and no tie-acceptance:
/// the first improving swap is taken and the scan restarts, and a full pass
/// with no improvement terminates early. The result is a local optimum, not
/// necessarily a global one.
pub fn compose_ideal_team(registry: &HeroRegistry, partial: &[Option<String>]) -> ComposedTeam {
    let mut slots: Vec<Option<String>> = partial.to_vec();
    slots.resize(TEAM_SIZE, None);
    slots.truncate(TEAM_SIZE);

    greedy_fill_missing_partners(registry, &mut slots);
    greedy_fill_absent_pairs(registry, &mut slots);
    local_search(registry, &mut slots);

    let evaluation = evaluate(registry, &populated_ids(&slots));
    ComposedTeam {
        roster: slots,
        evaluation,
    }
}

/// Pass 1: for each high-impact relation with exactly one member present,
/// place the missing member into the first empty slot. Relation table order
/// breaks ties between relations.
fn greedy_fill_missing_partners(registry: &HeroRegistry, slots: &mut [Option<String>]) {
    for relation in high_impact(registry) {
        let anchor_present = contains(slots, &relation.anchor);
        let partner_present = contains(slots, &relation.partner);
        if anchor_present == partner_present {
            continue;
        }
        let missing = if anchor_present {
            &relation.partner
        } else {
            &relation.anchor
        };
        if registry.contains(missing) {
            place_in_first_empty(slots, missing);
        }
    }
}

/// Pass 2: for each remaining high-impact relation with neither member
/// present, place the anchor and then the partner, stopping once full.
fn greedy_fill_absent_pairs(registry: &HeroRegistry, slots: &mut [Option<String>]) {
    for relation in high_impact(registry) {
        if !slots.iter().any(Option::is_none) {
            break;
        }
        if contains(slots, &relation.anchor) || contains(slots, &relation.partner) {
            continue;
        }
        for member in [&relation.anchor, &relation.partner] {
            if registry.contains(member) && !contains(slots, member) {
                place_in_first_empty(slots, member);
            }
        }
    }
}

fn local_search(registry: &HeroRegistry, slots: &mut Vec<Option<String>>) {
    for _ in 0..MAX_SEARCH_ITERATIONS {
        let base = evaluate(registry, &populated_ids(slots)).score;
        let mut improved = false;

        'slots: for index in 0..slots.len() {
            for hero in registry.heroes() {
                if slots[index].as_deref() == Some(hero.id.as_str()) {
                    continue;
                }
                let used_elsewhere = slots
                    .iter()
                    .enumerate()
                    .any(|(other, slot)| other != index && slot.as_deref() == Some(hero.id.as_str()));
                if used_elsewhere {
                    continue;
                }

                let previous = slots[index].replace(hero.id.clone());
                if evaluate(registry, &populated_ids(slots)).score > base {
                    // Accept the swap and restart the scan from the top.
                    improved = true;
                    break 'slots;
                }
                slots[index] = previous;
            }
        }

        if !improved {
            break;
        }
    }
}

fn high_impact(registry: &HeroRegistry) -> impl Iterator<Item = &TeamUp> {
    registry
        .team_ups()
        .iter()
        .filter(|relation| relation.score >= HIGH_IMPACT_SCORE)
}

fn contains(slots: &[Option<String>], id: &str) -> bool {
    slots.iter().flatten().any(|member| member == id)
}

fn place_in_first_empty(slots: &mut [Option<String>], id: &str) {
    if let Some(slot) = slots.iter_mut().find(|slot| slot.is_none()) {
        *slot = Some(id.to_string());
    }
}

fn populated_ids(slots: &[Option<String>]) -> Vec<String> {
    slots.iter().flatten().cloned().collect()
}
