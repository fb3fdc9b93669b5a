//! Replacement recommendations for a single editable roster slot, ranked by
//! synergy delta alone or by a weighted blend of synergy and counter deltas
//! plus a role-scarcity bias.

use serde::Serialize;

use crate::data::data_registry::HeroRegistry;
use crate::data::hero::Role;
use crate::engine::counter::counter_score;
use crate::engine::evaluator::evaluate;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;
pub const DEFAULT_COUNTER_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub hero_id: String,
    pub name: String,
    pub role: Role,
    pub synergy_delta: i32,
    pub counter_delta: f64,
    pub role_bias: i32,
    pub total: f64,
}

/// Rank replacement candidates for `editable_index` by synergy delta plus
/// role-scarcity bias. Candidates already used elsewhere on the roster are
/// never proposed, and only strictly positive ranking values survive. Ties
/// keep the registry's canonical order.
pub fn recommend_replacements(
    registry: &HeroRegistry,
    roster: &[Option<String>],
    editable_index: usize,
    limit: usize,
) -> Vec<RankedCandidate> {
    rank_candidates(registry, roster, editable_index, None, 0.0, limit)
}

/// Rank replacement candidates by `synergy_delta + counter_delta *
/// counter_weight + role_bias` against an observed enemy roster. A candidate
/// survives the filter when any of its three components is strictly positive;
/// a candidate flat-to-negative on all three is discarded even if the
/// weighted total happens to be positive.
pub fn recommend_replacements_with_counters(
    registry: &HeroRegistry,
    roster: &[Option<String>],
    editable_index: usize,
    enemy_roster: &[String],
    limit: usize,
    counter_weight: f64,
) -> Vec<RankedCandidate> {
    rank_candidates(
        registry,
        roster,
        editable_index,
        Some(enemy_roster),
        counter_weight,
        limit,
    )
}

fn rank_candidates(
    registry: &HeroRegistry,
    roster: &[Option<String>],
    editable_index: usize,
    enemy_roster: Option<&[String]>,
    counter_weight: f64,
    limit: usize,
) -> Vec<RankedCandidate> {
    let mut slots: Vec<Option<String>> = roster.to_vec();
    if slots.len() <= editable_index {
        slots.resize(editable_index + 1, None);
    }

    let populated = populated_ids(&slots);
    let base_score = evaluate(registry, &populated).score;
    let occupant = slots[editable_index].clone();
    let occupant_counter = match (&occupant, enemy_roster) {
        (Some(occupant), Some(enemy)) => counter_score(registry, occupant, &populated, enemy),
        _ => 0.0,
    };

    let mut ranked: Vec<RankedCandidate> = Vec::new();
    for hero in registry.heroes() {
        if occupant.as_deref() == Some(hero.id.as_str()) {
            continue;
        }
        // Never recommend a hero already used on another slot.
        let used_elsewhere = slots
            .iter()
            .enumerate()
            .any(|(index, slot)| index != editable_index && slot.as_deref() == Some(hero.id.as_str()));
        if used_elsewhere {
            continue;
        }

        slots[editable_index] = Some(hero.id.clone());
        let synergy_delta = evaluate(registry, &populated_ids(&slots)).score - base_score;
        slots[editable_index] = occupant.clone();

        let role_bias = role_scarcity_bias(registry, &slots, editable_index, hero.role);

        let (counter_delta, total, keep) = match enemy_roster {
            Some(enemy) => {
                let counter_delta =
                    counter_score(registry, &hero.id, &populated, enemy) - occupant_counter;
                let total = synergy_delta as f64 + counter_delta * counter_weight + role_bias as f64;
                let keep = synergy_delta > 0 || counter_delta > 0.0 || role_bias > 0;
                (counter_delta, total, keep)
            }
            None => {
                let ranking_value = synergy_delta + role_bias;
                (0.0, ranking_value as f64, ranking_value > 0)
            }
        };

        if keep {
            ranked.push(RankedCandidate {
                hero_id: hero.id.clone(),
                name: hero.name.clone(),
                role: hero.role,
                synergy_delta,
                counter_delta,
                role_bias,
                total,
            });
        }
    }

    // Stable sort keeps canonical registry order for equal totals.
    ranked.sort_by(|left, right| right.total.total_cmp(&left.total));
    ranked.truncate(limit);
    ranked
}

/// +5 when the candidate's role has no representation elsewhere on the
/// roster, +2 when it has exactly one, else 0.
fn role_scarcity_bias(
    registry: &HeroRegistry,
    slots: &[Option<String>],
    editable_index: usize,
    candidate_role: Role,
) -> i32 {
    let elsewhere = slots
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != editable_index)
        .filter_map(|(_, slot)| slot.as_deref())
        .filter_map(|id| registry.hero(id))
        .filter(|hero| hero.role == candidate_role)
        .count();
    match elsewhere {
        0 => 5,
        1 => 2,
        _ => 0,
    }
}

fn populated_ids(slots: &[Option<String>]) -> Vec<String> {
    slots.iter().flatten().cloned().collect()
}
