pub mod composer;
pub mod counter;
pub mod evaluator;
pub mod recommend;

pub use composer::{
    compose_ideal_team, ComposedTeam, HIGH_IMPACT_SCORE, MAX_SEARCH_ITERATIONS, TEAM_SIZE,
};
pub use counter::counter_score;
pub use evaluator::{evaluate, role_count_bonus, Evaluation, RoleBonusBreakdown, RoleCounts};
pub use recommend::{
    recommend_replacements, recommend_replacements_with_counters, RankedCandidate,
    DEFAULT_COUNTER_WEIGHT, DEFAULT_RECOMMENDATION_LIMIT,
};
