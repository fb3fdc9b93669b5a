//! Roster synergy scoring: active team-ups plus a role-balance bonus.
//!
//! Pure function of the registry and the roster. Unknown hero ids contribute
//! no role and join no team-up; duplicate ids are tolerated (team-up
//! membership is a set test, role counts tally the roster as given).

use std::collections::HashSet;

use serde::Serialize;

use crate::data::data_registry::HeroRegistry;
use crate::data::hero::Role;
use crate::data::teamup::TeamUp;

/// Role-balance value of having `count` heroes of one role. Zero coverage is
/// penalized, two is the reliability sweet spot, stacking past two tapers off.
pub fn role_count_bonus(count: usize) -> i32 {
    match count {
        0 => -8,
        1 => 2,
        2 => 7,
        3 => 5,
        4 => 3,
        5 => 1,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub vanguard: usize,
    pub duelist: usize,
    pub strategist: usize,
}

impl RoleCounts {
    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::Vanguard => self.vanguard,
            Role::Duelist => self.duelist,
            Role::Strategist => self.strategist,
        }
    }

    fn increment(&mut self, role: Role) {
        match role {
            Role::Vanguard => self.vanguard += 1,
            Role::Duelist => self.duelist += 1,
            Role::Strategist => self.strategist += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleBonusBreakdown {
    pub vanguard: i32,
    pub duelist: i32,
    pub strategist: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Base team-up score plus role bonus. May be negative.
    pub score: i32,
    /// Relations whose anchor and partner are both on the roster, in table order.
    pub active_team_ups: Vec<TeamUp>,
    pub role_counts: RoleCounts,
    pub role_bonus: i32,
    pub role_bonus_breakdown: RoleBonusBreakdown,
}

/// Score a roster. Accepts any list of hero ids; callers filter out empty
/// slots before calling. Never fails.
pub fn evaluate(registry: &HeroRegistry, roster: &[String]) -> Evaluation {
    let members: HashSet<&str> = roster.iter().map(String::as_str).collect();

    let active_team_ups: Vec<TeamUp> = registry
        .team_ups()
        .iter()
        .filter(|relation| {
            members.contains(relation.anchor.as_str())
                && members.contains(relation.partner.as_str())
        })
        .cloned()
        .collect();
    let base_score: i32 = active_team_ups
        .iter()
        .map(|relation| relation.score as i32)
        .sum();

    let mut role_counts = RoleCounts::default();
    for id in roster {
        if let Some(hero) = registry.hero(id) {
            role_counts.increment(hero.role);
        }
    }

    let role_bonus_breakdown = RoleBonusBreakdown {
        vanguard: role_count_bonus(role_counts.vanguard),
        duelist: role_count_bonus(role_counts.duelist),
        strategist: role_count_bonus(role_counts.strategist),
    };
    let role_bonus =
        role_bonus_breakdown.vanguard + role_bonus_breakdown.duelist + role_bonus_breakdown.strategist;

    Evaluation {
        score: base_score + role_bonus,
        active_team_ups,
        role_counts,
        role_bonus,
        role_bonus_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::counters::CounterResponses;
    use crate::data::hero::Hero;

    fn hero(id: &str, role: Role) -> Hero {
        Hero {
            id: id.to_string(),
            name: id.to_string(),
            role,
            tags: Vec::new(),
        }
    }

    fn relation(anchor: &str, partner: &str, score: u32) -> TeamUp {
        TeamUp {
            anchor: anchor.to_string(),
            partner: partner.to_string(),
            label: format!("{anchor}+{partner}"),
            score,
            notes: None,
        }
    }

    fn registry() -> HeroRegistry {
        HeroRegistry::from_parts(
            vec![
                hero("tank_a", Role::Vanguard),
                hero("tank_b", Role::Vanguard),
                hero("dps_a", Role::Duelist),
                hero("dps_b", Role::Duelist),
                hero("heal_a", Role::Strategist),
                hero("heal_b", Role::Strategist),
            ],
            vec![relation("tank_a", "dps_a", 8), relation("dps_a", "heal_a", 4)],
            CounterResponses::default(),
        )
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn role_bonus_table_boundaries() {
        assert_eq!(role_count_bonus(0), -8);
        assert_eq!(role_count_bonus(1), 2);
        assert_eq!(role_count_bonus(2), 7);
        assert_eq!(role_count_bonus(3), 5);
        assert_eq!(role_count_bonus(4), 3);
        assert_eq!(role_count_bonus(5), 1);
        assert_eq!(role_count_bonus(6), 0);
        assert_eq!(role_count_bonus(7), 0);
    }

    #[test]
    fn team_up_requires_both_members() {
        let registry = registry();

        let both = evaluate(&registry, &ids(&["tank_a", "dps_a"]));
        assert_eq!(both.active_team_ups.len(), 1);
        assert_eq!(both.active_team_ups[0].score, 8);

        let one = evaluate(&registry, &ids(&["tank_a", "dps_b"]));
        assert!(one.active_team_ups.is_empty());
    }

    #[test]
    fn score_is_base_plus_role_bonus() {
        let registry = registry();
        let eval = evaluate(&registry, &ids(&["tank_a", "dps_a"]));

        // One active relation (8); one vanguard, one duelist, no strategist.
        assert_eq!(eval.role_bonus, 2 + 2 + (-8));
        assert_eq!(eval.score, 8 + eval.role_bonus);
        assert_eq!(eval.role_counts, RoleCounts { vanguard: 1, duelist: 1, strategist: 0 });
    }

    #[test]
    fn overlapping_relations_stack() {
        let registry = registry();
        let eval = evaluate(&registry, &ids(&["tank_a", "dps_a", "heal_a"]));
        assert_eq!(eval.active_team_ups.len(), 2);
        assert_eq!(eval.score - eval.role_bonus, 12);
    }

    #[test]
    fn empty_roster_scores_three_missing_roles() {
        let registry = registry();
        let eval = evaluate(&registry, &[]);
        assert!(eval.active_team_ups.is_empty());
        assert_eq!(eval.role_bonus, -24);
        assert_eq!(eval.score, -24);
    }

    #[test]
    fn unknown_ids_are_silently_ignored() {
        let registry = registry();
        let eval = evaluate(&registry, &ids(&["tank_a", "nobody", ""]));
        assert_eq!(eval.role_counts, RoleCounts { vanguard: 1, duelist: 0, strategist: 0 });
        assert!(eval.active_team_ups.is_empty());
    }

    #[test]
    fn duplicate_ids_do_not_double_team_ups() {
        let registry = registry();
        let eval = evaluate(&registry, &ids(&["tank_a", "tank_a", "dps_a"]));
        // Membership is a set test: the relation is active exactly once.
        assert_eq!(eval.active_team_ups.len(), 1);
        // Role counts tally the roster as given.
        assert_eq!(eval.role_counts.vanguard, 2);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let registry = registry();
        let roster = ids(&["tank_a", "tank_b", "dps_a", "dps_b", "heal_a", "heal_b"]);
        let first = evaluate(&registry, &roster);
        let second = evaluate(&registry, &roster);
        assert_eq!(first, second);
    }
}
